//! Headless-browser APR extraction for staking pages without an API

pub mod driver;
pub mod extractor;

use std::time::Duration;

use thiserror::Error;

pub use driver::{HeadlessChromeSession, PageDriver};
pub use extractor::extract_apr;

/// Failure while reading a value off a rendered page
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Browser error: {0}")]
    Browser(String),
    #[error("Could not parse '{0}' as a percentage")]
    Parse(String),
    #[error("Timed out after {0:?}")]
    TimedOut(Duration),
}
