//! Staking token catalog models

use std::fmt;

/// Risk label shown next to a staking option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Moderate => write!(f, "Moderate"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// Where a token's APR is looked up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AprSourceKind {
    /// Yield aggregator listing, matched by symbol
    Aggregator,
    /// Value rendered on the staking platform's page
    PageExtraction { url: String },
}

/// A staking option known to the calculator
#[derive(Debug, Clone)]
pub struct StakingToken {
    /// Display and aggregator symbol, e.g. `LGNS`
    pub symbol: String,
    /// Price service identifier, e.g. `origin-lgns`
    pub price_id: String,
    pub platform: String,
    /// APR percent used when the source yields nothing
    pub fallback_apr: f64,
    pub risk: RiskTier,
    pub risk_note: Option<String>,
    pub apr_source: AprSourceKind,
    /// Rebase count per day for reward-rebasing tokens
    pub rebases_per_day: Option<u32>,
}

impl StakingToken {
    pub fn new(symbol: &str, price_id: &str, platform: &str, fallback_apr: f64, risk: RiskTier) -> Self {
        Self {
            symbol: symbol.to_string(),
            price_id: price_id.to_string(),
            platform: platform.to_string(),
            fallback_apr,
            risk,
            risk_note: None,
            apr_source: AprSourceKind::Aggregator,
            rebases_per_day: None,
        }
    }

    pub fn with_risk_note(mut self, note: &str) -> Self {
        self.risk_note = Some(note.to_string());
        self
    }

    pub fn with_page_source(mut self, url: &str) -> Self {
        self.apr_source = AprSourceKind::PageExtraction { url: url.to_string() };
        self
    }

    pub fn with_rebases_per_day(mut self, rebases_per_day: u32) -> Self {
        self.rebases_per_day = Some(rebases_per_day);
        self
    }
}
