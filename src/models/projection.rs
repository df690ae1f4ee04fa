//! Growth projection models

/// How a token's balance grows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YieldSpec {
    /// Annual percentage rate compounded daily
    Apr { annual_percent: f64 },
    /// Annual percentage rate paid out over `rebases_per_day` balance rebases
    Rebase { annual_percent: f64, rebases_per_day: u32 },
}

/// Projected holdings after a horizon
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    /// Starting token quantity
    pub principal: f64,
    pub horizon_days: u32,
    pub projected_tokens: f64,
    /// `projected_tokens` valued at the request's price snapshot
    pub projected_fiat_value: f64,
}
