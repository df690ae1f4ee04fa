//! Price and APR acquisition plus the fallback policy

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::api::browser::{extract_apr, ExtractionError, HeadlessChromeSession, PageDriver};
use crate::api::coingecko::CoinGeckoClient;
use crate::api::defillama::{find_by_symbol, YieldsClient};
use crate::config::BrowserConfig;
use crate::models::{AprSourceKind, PriceSnapshot, ResolvedApr, StakingToken};
use crate::utils::AppError;

/// Spot price feed
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Price of `token_id` in `currency`, or `None` if it cannot be obtained
    async fn fetch_price(&self, token_id: &str, currency: &str) -> Option<f64>;
}

/// Source of a token's APR in percent
#[async_trait]
pub trait AprSource: Send + Sync {
    async fn fetch_apr(&self, token: &StakingToken) -> Option<f64>;
}

/// Pick the fetched APR unless it is missing or exactly zero
///
/// A genuinely zero-yield listing is indistinguishable from a missing one
/// here and is replaced by `fallback` as well.
pub fn resolve_apr(primary: Option<f64>, fallback: f64) -> f64 {
    match primary {
        Some(apr) if apr != 0.0 => apr,
        _ => fallback,
    }
}

#[async_trait]
impl PriceSource for CoinGeckoClient {
    async fn fetch_price(&self, token_id: &str, currency: &str) -> Option<f64> {
        match self.get_simple_price(token_id, currency).await {
            Ok(Some(price)) if price > 0.0 => {
                debug!("Price for {} in {}: {}", token_id, currency, price);
                Some(price)
            }
            Ok(Some(price)) => {
                warn!("Ignoring non-positive price {} for {}", price, token_id);
                None
            }
            Ok(None) => {
                warn!("No {} price for {} in response", currency, token_id);
                None
            }
            Err(e) => {
                warn!("Price lookup for {} failed: {}", token_id, e);
                None
            }
        }
    }
}

/// APR looked up by symbol in the yield aggregator listing
pub struct AggregatorSource {
    client: YieldsClient,
}

impl AggregatorSource {
    pub fn new(client: YieldsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AprSource for AggregatorSource {
    async fn fetch_apr(&self, token: &StakingToken) -> Option<f64> {
        let records = match self.client.get_yields().await {
            Ok(records) => records,
            Err(e) => {
                warn!("Yield listing unavailable for {}: {}", token.symbol, e);
                return None;
            }
        };

        match find_by_symbol(&records, &token.symbol) {
            Some(record) => {
                let apr = record.apr_percent();
                debug!("Aggregator APR for {}: {:.4}%", token.symbol, apr);
                Some(apr)
            }
            None => {
                debug!("No aggregator listing for {} among {} records", token.symbol, records.len());
                None
            }
        }
    }
}

type Launcher = dyn Fn() -> Result<Box<dyn PageDriver + Send>, ExtractionError> + Send + Sync;

/// APR read off the staking platform's rendered page
pub struct PageExtractionSource {
    config: BrowserConfig,
    launcher: Arc<Launcher>,
}

impl PageExtractionSource {
    /// Extract with a fresh headless Chrome per lookup
    pub fn new(config: BrowserConfig) -> Self {
        Self::with_launcher(config, || {
            HeadlessChromeSession::launch().map(|s| Box::new(s) as Box<dyn PageDriver + Send>)
        })
    }

    /// Extract with drivers created by `launcher`
    pub fn with_launcher<L>(config: BrowserConfig, launcher: L) -> Self
    where
        L: Fn() -> Result<Box<dyn PageDriver + Send>, ExtractionError> + Send + Sync + 'static,
    {
        Self {
            config,
            launcher: Arc::new(launcher),
        }
    }
}

#[async_trait]
impl AprSource for PageExtractionSource {
    async fn fetch_apr(&self, token: &StakingToken) -> Option<f64> {
        let url = match &token.apr_source {
            AprSourceKind::PageExtraction { url } => url.clone(),
            AprSourceKind::Aggregator => return None,
        };

        let launcher = Arc::clone(&self.launcher);
        let config = self.config;
        let target = url.clone();

        // The driver lives only inside this closure, so it is dropped (and
        // the browser closed) on success and failure alike.
        let outcome = tokio::task::spawn_blocking(move || {
            let mut driver = launcher()?;
            extract_apr(&mut *driver, &target, &config)
        })
        .await;

        match outcome {
            Ok(Ok(apr)) => {
                info!("Page APR for {}: {:.2}%", token.symbol, apr);
                Some(apr)
            }
            Ok(Err(e)) => {
                warn!("Page extraction for {} from {} failed: {}", token.symbol, url, e);
                None
            }
            Err(e) => {
                warn!("Page extraction task for {} aborted: {}", token.symbol, e);
                None
            }
        }
    }
}

/// APR sources keyed by [`AprSourceKind`]
#[derive(Clone)]
pub struct AprSources {
    pub aggregator: Arc<dyn AprSource>,
    pub page: Arc<dyn AprSource>,
}

impl AprSources {
    pub fn for_token(&self, token: &StakingToken) -> &dyn AprSource {
        match token.apr_source {
            AprSourceKind::Aggregator => self.aggregator.as_ref(),
            AprSourceKind::PageExtraction { .. } => self.page.as_ref(),
        }
    }
}

/// Fetch one price per token; any missing price halts the request
pub async fn fetch_prices(
    source: &dyn PriceSource,
    tokens: &[StakingToken],
    currency: &str,
) -> Result<PriceSnapshot, AppError> {
    let mut prices = Vec::with_capacity(tokens.len());

    for token in tokens {
        let price = source
            .fetch_price(&token.price_id, currency)
            .await
            .ok_or_else(|| AppError::PriceUnavailable(token.price_id.clone()))?;
        prices.push((token.symbol.clone(), price));
    }

    Ok(PriceSnapshot {
        currency: currency.to_string(),
        prices,
        fetched_at: chrono::Utc::now(),
    })
}

/// Fetch each token's APR in order, one attempt each
pub async fn fetch_aprs(sources: &AprSources, tokens: &[StakingToken]) -> Vec<Option<f64>> {
    let mut aprs = Vec::with_capacity(tokens.len());
    for token in tokens {
        aprs.push(sources.for_token(token).fetch_apr(token).await);
    }
    aprs
}

/// Apply each token's fallback to the fetched APRs
pub fn resolve_aprs(tokens: &[StakingToken], fetched: &[Option<f64>]) -> Vec<ResolvedApr> {
    tokens
        .iter()
        .zip(fetched)
        .map(|(token, primary)| {
            let apr = resolve_apr(*primary, token.fallback_apr);
            let from_fallback = !matches!(primary, Some(v) if *v != 0.0);
            if from_fallback {
                info!("Using default APR {:.2}% for {}", token.fallback_apr, token.symbol);
            }
            ResolvedApr {
                symbol: token.symbol.clone(),
                apr,
                from_fallback,
            }
        })
        .collect()
}
