//! Built-in staking options

use super::AppConfig;
use crate::models::{RiskTier, StakingToken};

/// Tokens projected by `$stake`, in display order
pub fn tracked_tokens(config: &AppConfig) -> Vec<StakingToken> {
    let mut lgns = StakingToken::new("LGNS", "origin-lgns", "Origin DeFi", 100.0, RiskTier::High)
        .with_risk_note("High risk. The APR is high but unstable. Avoid long-term positions without further research.");
    if let Some(url) = &config.lgns_page_url {
        lgns = lgns.with_page_source(url);
    }
    if let Some(rebases) = config.lgns_rebases_per_day {
        lgns = lgns.with_rebases_per_day(rebases);
    }

    let axs = StakingToken::new("AXS", "axie-infinity", "Stake.axieinfinity.com", 28.0, RiskTier::Moderate)
        .with_risk_note("Moderate risk. Stable APR and a large ecosystem. Stay aware of price volatility.");

    vec![lgns, axs]
}

/// Additional options listed only in the recommendation table
pub fn recommendation_only_tokens() -> Vec<StakingToken> {
    vec![
        StakingToken::new("ATOM", "cosmos", "Keplr", 19.0, RiskTier::Moderate),
        StakingToken::new("OSMO", "osmosis", "Osmosis Zone", 22.0, RiskTier::Moderate),
        StakingToken::new("stETH", "staked-ether", "Lido Finance", 3.6, RiskTier::Low),
    ]
}

/// Tracked tokens followed by recommendation-only tokens
pub fn recommendation_tokens(config: &AppConfig) -> Vec<StakingToken> {
    let mut tokens = tracked_tokens(config);
    tokens.extend(recommendation_only_tokens());
    tokens
}

/// Case-insensitive lookup across the whole catalog
pub fn find_token(config: &AppConfig, symbol: &str) -> Option<StakingToken> {
    recommendation_tokens(config)
        .into_iter()
        .find(|t| t.symbol.to_lowercase() == symbol.to_lowercase())
}
