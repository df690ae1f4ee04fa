//! Recommendation table models

use super::token::RiskTier;

/// One row of the staking comparison table
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRow {
    pub token: String,
    pub platform: String,
    pub apr: f64,
    pub risk: RiskTier,
}
