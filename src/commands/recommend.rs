use crate::config::catalog;
use crate::context::AppContext;
use crate::services::recommendation_service::{get_recommendations, render_recommendations};
use crate::utils::AppError;

pub async fn execute(ctx: &AppContext) -> Result<String, AppError> {
    tracing::info!("📊 Recommendation table requested");

    let tokens = catalog::recommendation_tokens(&ctx.config);
    let rows = get_recommendations(&ctx.apr_sources, &tokens).await;

    Ok(format!("📊 Top staking options\n{}", render_recommendations(&rows)))
}
