//! The `$stake` pipeline
//!
//! parse capital -> fetch prices -> fetch APRs -> resolve fallbacks ->
//! project horizons -> build report. Only the two fetch stages touch the
//! network; everything else is a pure function of its inputs.

use tracing::{debug, info};

use crate::config::{catalog, AppConfig, HORIZON_DAYS};
use crate::context::AppContext;
use crate::models::{PriceSnapshot, ResolvedApr, SimulationReport, StakingToken, TokenReport, YieldSpec};
use crate::services::projection_service::project_horizons;
use crate::services::rate_service::{fetch_aprs, fetch_prices, resolve_aprs};
use crate::services::recommendation_service::build_recommendations;
use crate::utils::{parse_capital, AppError};

/// Yield model for a token: an explicit rebase count wins over the catalog's
pub fn yield_spec_for(token: &StakingToken, apr: f64, rebase_override: Option<u32>) -> YieldSpec {
    match rebase_override.or(token.rebases_per_day) {
        Some(rebases_per_day) => YieldSpec::Rebase { annual_percent: apr, rebases_per_day },
        None => YieldSpec::Apr { annual_percent: apr },
    }
}

/// Assemble the report from already-fetched inputs
///
/// `resolved` must hold an entry for every tracked token; recommendation
/// rows are built for whichever catalog tokens appear in it.
pub fn build_report(
    config: &AppConfig,
    capital: i64,
    tracked: &[StakingToken],
    snapshot: &PriceSnapshot,
    catalog_tokens: &[StakingToken],
    resolved: &[ResolvedApr],
    rebase_override: Option<u32>,
) -> Result<SimulationReport, AppError> {
    let mut tokens = Vec::with_capacity(tracked.len());

    for token in tracked {
        let price = snapshot
            .price_of(&token.symbol)
            .ok_or_else(|| AppError::PriceUnavailable(token.price_id.clone()))?;
        let apr = resolved
            .iter()
            .find(|a| a.symbol == token.symbol)
            .cloned()
            .unwrap_or_else(|| ResolvedApr {
                symbol: token.symbol.clone(),
                apr: token.fallback_apr,
                from_fallback: true,
            });

        let principal = capital as f64 / price;
        let yield_spec = yield_spec_for(token, apr.apr, rebase_override);
        let projections = project_horizons(principal, &yield_spec, &HORIZON_DAYS, price);

        tokens.push(TokenReport {
            symbol: token.symbol.clone(),
            price,
            apr,
            yield_spec,
            risk: token.risk,
            risk_note: token.risk_note.clone(),
            projections,
        });
    }

    Ok(SimulationReport {
        capital,
        currency: snapshot.currency.clone(),
        currency_symbol: config.currency_symbol.clone(),
        fetched_at: snapshot.fetched_at,
        tokens,
        recommendations: build_recommendations(catalog_tokens, resolved),
    })
}

/// Run the full pipeline for one `$stake` request
pub async fn run_simulation(
    ctx: &AppContext,
    capital_text: &str,
    rebase_override: Option<u32>,
) -> Result<SimulationReport, AppError> {
    let capital = parse_capital(capital_text)?;
    info!("Simulating capital {} {}", capital, ctx.config.currency);

    let tracked = catalog::tracked_tokens(&ctx.config);
    let snapshot = fetch_prices(ctx.prices.as_ref(), &tracked, &ctx.config.currency).await?;
    debug!("Price snapshot: {:?}", snapshot.prices);

    let catalog_tokens = catalog::recommendation_tokens(&ctx.config);
    let fetched = fetch_aprs(&ctx.apr_sources, &catalog_tokens).await;
    let resolved = resolve_aprs(&catalog_tokens, &fetched);

    build_report(
        &ctx.config,
        capital,
        &tracked,
        &snapshot,
        &catalog_tokens,
        &resolved,
        rebase_override,
    )
}
