use thiserror::Error;

/// Errors that halt a command and are shown to the user
#[derive(Debug, Error)]
pub enum AppError {
    /// Capital text is not an integer once separators are stripped
    #[error("Invalid number format. Use a dot as the thousands separator, e.g. 1.000.000 (got '{0}')")]
    InputFormat(String),

    /// A tracked token has no spot price, so nothing can be projected
    #[error("Failed to fetch the price of '{0}' from the price service")]
    PriceUnavailable(String),

    /// Command was called with missing or malformed arguments
    #[error("{0}")]
    InvalidArguments(String),

    /// Environment configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),
}
