//! Simulation request and report models

use chrono::{DateTime, Utc};

use super::projection::{ProjectionResult, YieldSpec};
use super::recommendation::RecommendationRow;
use super::token::RiskTier;

/// Spot prices captured once per request
#[derive(Debug, Clone)]
pub struct PriceSnapshot {
    pub currency: String,
    /// `(symbol, price)` in tracked-token order
    pub prices: Vec<(String, f64)>,
    pub fetched_at: DateTime<Utc>,
}

impl PriceSnapshot {
    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        self.prices
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, price)| *price)
    }
}

/// APR after the fallback policy has been applied
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedApr {
    pub symbol: String,
    pub apr: f64,
    /// True when the configured default replaced the fetched value
    pub from_fallback: bool,
}

/// Projection outcome for one tracked token
#[derive(Debug, Clone)]
pub struct TokenReport {
    pub symbol: String,
    pub price: f64,
    pub apr: ResolvedApr,
    pub yield_spec: YieldSpec,
    pub risk: RiskTier,
    pub risk_note: Option<String>,
    pub projections: Vec<ProjectionResult>,
}

/// Everything the stake command renders
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub capital: i64,
    pub currency: String,
    pub currency_symbol: String,
    pub fetched_at: DateTime<Utc>,
    pub tokens: Vec<TokenReport>,
    pub recommendations: Vec<RecommendationRow>,
}
