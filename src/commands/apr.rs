use crate::config::catalog;
use crate::context::AppContext;
use crate::models::{RiskTier, StakingToken};
use crate::services::rate_service::resolve_apr;
use crate::utils::{format_percent, AppError};

pub async fn execute(ctx: &AppContext, args: &[&str]) -> Result<String, AppError> {
    tracing::info!("📡 APR command called with args: {:?}", args);

    let symbol = args
        .first()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::InvalidArguments("Usage: `$apr <symbol>`".to_string()))?;

    // Catalog tokens keep their configured source; anything else goes to the aggregator
    let known = catalog::find_token(&ctx.config, symbol);
    let token = known
        .clone()
        .unwrap_or_else(|| StakingToken::new(symbol, &symbol.to_lowercase(), "-", 0.0, RiskTier::Moderate));

    let fetched = ctx.apr_sources.for_token(&token).fetch_apr(&token).await;

    let reply = match (fetched, known) {
        (Some(apr), Some(token)) if apr != 0.0 => format!("📡 APR {}: {}", token.symbol, format_percent(apr)),
        (Some(apr), None) if apr != 0.0 => format!("📡 APR {}: {}", symbol, format_percent(apr)),
        (primary, Some(token)) => format!(
            "📡 No usable APR listed for {}; the default {} applies",
            token.symbol,
            format_percent(resolve_apr(primary, token.fallback_apr))
        ),
        (_, None) => format!("📡 No usable APR listed for {}", symbol),
    };

    Ok(reply)
}
