use std::sync::Arc;

use crate::api::coingecko::CoinGeckoClient;
use crate::api::defillama::YieldsClient;
use crate::config::AppConfig;
use crate::services::rate_service::{AggregatorSource, AprSource, AprSources, PageExtractionSource, PriceSource};

/// Shared state handed to every command
pub struct AppContext {
    pub config: AppConfig,
    pub prices: Arc<dyn PriceSource>,
    pub apr_sources: AprSources,
}

impl AppContext {
    /// Wire the live HTTP and browser sources from configuration
    pub fn from_config(config: AppConfig) -> Self {
        let prices: Arc<dyn PriceSource> =
            Arc::new(CoinGeckoClient::with_base_url(config.coingecko_base_url.clone()));
        let aggregator: Arc<dyn AprSource> = Arc::new(AggregatorSource::new(YieldsClient::with_base_url(
            config.yields_base_url.clone(),
        )));
        let page: Arc<dyn AprSource> = Arc::new(PageExtractionSource::new(config.browser));

        Self {
            config,
            prices,
            apr_sources: AprSources { aggregator, page },
        }
    }
}
