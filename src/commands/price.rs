use crate::context::AppContext;
use crate::utils::{format_currency, AppError};

pub async fn execute(ctx: &AppContext, args: &[&str]) -> Result<String, AppError> {
    tracing::info!("💹 Price command called with args: {:?}", args);

    let token_id = args
        .first()
        .map(|id| id.trim().to_lowercase())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidArguments("Usage: `$price <token-id> [currency]`".to_string()))?;

    let currency = args
        .get(1)
        .map(|c| c.to_lowercase())
        .unwrap_or_else(|| ctx.config.currency.clone());

    let price = ctx
        .prices
        .fetch_price(&token_id, &currency)
        .await
        .ok_or_else(|| AppError::PriceUnavailable(token_id.clone()))?;

    let symbol = if currency == ctx.config.currency {
        ctx.config.currency_symbol.clone()
    } else {
        currency.to_uppercase()
    };

    Ok(format!(
        "💰 1 {} = {} ({} {})",
        token_id,
        format_currency(price, &symbol),
        price,
        currency.to_uppercase()
    ))
}
