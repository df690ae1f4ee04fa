use reqwest::Client as HttpClient;

use super::models::YieldRecord;
use crate::api::ApiError;

/// Yield aggregator client (DefiLlama-style listing)
pub struct YieldsClient {
    http_client: HttpClient,
    base_url: String,
}

impl YieldsClient {
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /yields
    ///
    /// Returns the full listing; callers pick the record they need.
    pub async fn get_yields(&self) -> Result<Vec<YieldRecord>, ApiError> {
        let url = format!("{}/yields", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }

        response
            .json::<Vec<YieldRecord>>()
            .await
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_yields_parses_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/yields"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "symbol": "AXS", "apy": 0.31, "chain": "Ronin" },
                { "symbol": "ATOM", "apy": 0.18 }
            ])))
            .mount(&server)
            .await;

        let client = YieldsClient::with_base_url(format!("{}/", server.uri()));
        let records = client.get_yields().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].symbol(), "ATOM");
    }

    #[tokio::test]
    async fn test_get_yields_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/yields"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = YieldsClient::with_base_url(server.uri());
        let err = client.get_yields().await.unwrap_err();
        assert!(matches!(err, ApiError::ServerError(503, _)));
    }

    #[tokio::test]
    async fn test_get_yields_wrong_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/yields"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "ok" })))
            .mount(&server)
            .await;

        let client = YieldsClient::with_base_url(server.uri());
        let err = client.get_yields().await.unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
