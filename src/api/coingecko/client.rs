use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::{extract_price, SimplePriceResponse};
use crate::api::ApiError;

/// CoinGecko public API client for spot prices
pub struct CoinGeckoClient {
    http_client: HttpClient,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a client for `base_url`, e.g. `https://api.coingecko.com/api/v3`
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /simple/price?ids={token_id}&vs_currencies={currency}
    ///
    /// # Returns
    /// * `Ok(Some(price))` - token and currency present in the body
    /// * `Ok(None)` - request succeeded but the pair is missing
    /// * `Err(ApiError)` - non-success status, network or parse failure
    pub async fn get_simple_price(&self, token_id: &str, currency: &str) -> Result<Option<f64>, ApiError> {
        let url = format!("{}/simple/price", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("ids", token_id), ("vs_currencies", currency)])
            .send()
            .await
            .map_err(|e| ApiError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }

        let body = response
            .json::<SimplePriceResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;

        let price = extract_price(&body, token_id, currency);
        debug!("CoinGecko {} in {}: {:?}", token_id, currency, price);
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_simple_price_reads_nested_value() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .and(query_param("ids", "origin-lgns"))
            .and(query_param("vs_currencies", "idr"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "origin-lgns": { "idr": 1000.0 }
            })))
            .mount(&server)
            .await;

        let client = CoinGeckoClient::with_base_url(server.uri());
        assert_eq!(client.get_simple_price("origin-lgns", "idr").await.unwrap(), Some(1000.0));
    }

    #[tokio::test]
    async fn test_get_simple_price_missing_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = CoinGeckoClient::with_base_url(server.uri());
        assert_eq!(client.get_simple_price("origin-lgns", "idr").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_simple_price_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/simple/price"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .mount(&server)
            .await;

        let client = CoinGeckoClient::with_base_url(server.uri());
        let err = client.get_simple_price("axie-infinity", "idr").await.unwrap_err();
        assert!(matches!(err, ApiError::RateLimited(_)));
    }
}
