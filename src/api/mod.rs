pub mod coingecko;
pub mod defillama;
pub mod browser;

use thiserror::Error;

/// Failure talking to an external HTTP API
#[derive(Debug, Error)]
pub enum ApiError {
    /// 429 Too Many Requests
    #[error("Rate limited: {0}")]
    RateLimited(String),
    /// 5xx Server Error
    #[error("Server error ({0}): {1}")]
    ServerError(u16, String),
    /// Any other non-success status
    #[error("HTTP error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request failed: {0}")]
    RequestError(String),
    /// Body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// Classify a non-success response by status code
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        match status {
            429 => ApiError::RateLimited(body),
            500..=599 => ApiError::ServerError(status, body),
            _ => ApiError::HttpError(status, body),
        }
    }
}
