//! Compound growth of a staked token balance

use crate::models::{ProjectionResult, YieldSpec};

/// Daily rate from an annual percentage: `apr / 100 / 365`
pub fn daily_rate(annual_percent: f64) -> f64 {
    let apr = annual_percent / 100.0;
    apr / 365.0
}

/// Daily-compounded growth of an APR over `days`
pub fn compound_growth(principal: f64, annual_percent: f64, days: u32) -> f64 {
    principal * (1.0 + daily_rate(annual_percent)).powf(days as f64)
}

/// Growth when the daily yield is paid out over `rebases_per_day` rebases
pub fn rebase_growth(principal: f64, annual_percent: f64, rebases_per_day: u32, days: u32) -> f64 {
    let yield_per_day = daily_rate(annual_percent);
    let rate_per_rebase = yield_per_day / rebases_per_day as f64;
    let total_rebases = rebases_per_day as f64 * days as f64;
    principal * (1.0 + rate_per_rebase).powf(total_rebases)
}

/// Token balance after `days` under `spec`
pub fn project_tokens(principal: f64, spec: &YieldSpec, days: u32) -> f64 {
    match *spec {
        YieldSpec::Apr { annual_percent } => compound_growth(principal, annual_percent, days),
        YieldSpec::Rebase { annual_percent, rebases_per_day } => {
            rebase_growth(principal, annual_percent, rebases_per_day, days)
        }
    }
}

/// Project `principal` tokens and value them at `price`
pub fn project(principal: f64, spec: &YieldSpec, days: u32, price: f64) -> ProjectionResult {
    let projected_tokens = project_tokens(principal, spec, days);
    ProjectionResult {
        principal,
        horizon_days: days,
        projected_tokens,
        projected_fiat_value: projected_tokens * price,
    }
}

/// Independent projections from the same principal and price for each horizon
pub fn project_horizons(principal: f64, spec: &YieldSpec, horizons: &[u32], price: f64) -> Vec<ProjectionResult> {
    horizons
        .iter()
        .map(|&days| project(principal, spec, days, price))
        .collect()
}
