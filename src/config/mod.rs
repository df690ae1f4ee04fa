//! Runtime configuration read from the environment (and `.env`)

pub mod catalog;

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::AppError;

pub const DEFAULT_CURRENCY: &str = "idr";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rp";
pub const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_YIELDS_BASE_URL: &str = "https://yields.llama.fi";
pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Capital used by `$stake` when none is given
pub const DEFAULT_CAPITAL: &str = "10.000.000";

/// Horizons projected by `$stake`, in days
pub const HORIZON_DAYS: [u32; 3] = [1, 7, 30];

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Price service currency code, e.g. `idr`
    pub currency: String,
    /// Label printed before fiat amounts
    pub currency_symbol: String,
    pub coingecko_base_url: String,
    pub yields_base_url: String,
    /// Switches LGNS to page extraction when set
    pub lgns_page_url: Option<String>,
    pub lgns_rebases_per_day: Option<u32>,
    pub browser: BrowserConfig,
}

/// Poll-with-timeout settings for page extraction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowserConfig {
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            wait_timeout: Duration::from_secs(DEFAULT_WAIT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            coingecko_base_url: DEFAULT_COINGECKO_BASE_URL.to_string(),
            yields_base_url: DEFAULT_YIELDS_BASE_URL.to_string(),
            lgns_page_url: None,
            lgns_rebases_per_day: None,
            browser: BrowserConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from process environment; unset keys keep their defaults
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let wait_secs: u64 = parse_var(&get, "BROWSER_WAIT_TIMEOUT_SECS")?.unwrap_or(DEFAULT_WAIT_TIMEOUT_SECS);
        let poll_ms: u64 = parse_var(&get, "BROWSER_POLL_INTERVAL_MS")?.unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        if poll_ms == 0 {
            return Err(AppError::Config("BROWSER_POLL_INTERVAL_MS must be greater than 0".to_string()));
        }

        let lgns_rebases_per_day: Option<u32> = parse_var(&get, "LGNS_REBASES_PER_DAY")?;
        if lgns_rebases_per_day == Some(0) {
            return Err(AppError::Config("LGNS_REBASES_PER_DAY must be greater than 0".to_string()));
        }

        Ok(Self {
            currency: get("STAKESIM_CURRENCY")
                .map(|c| c.to_lowercase())
                .unwrap_or(defaults.currency),
            currency_symbol: get("STAKESIM_CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            coingecko_base_url: get("COINGECKO_BASE_URL").unwrap_or(defaults.coingecko_base_url),
            yields_base_url: get("YIELDS_BASE_URL").unwrap_or(defaults.yields_base_url),
            lgns_page_url: get("LGNS_PAGE_URL"),
            lgns_rebases_per_day,
            browser: BrowserConfig {
                wait_timeout: Duration::from_secs(wait_secs),
                poll_interval: Duration::from_millis(poll_ms),
            },
        })
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.currency, "idr");
        assert_eq!(config.currency_symbol, "Rp");
        assert_eq!(config.coingecko_base_url, DEFAULT_COINGECKO_BASE_URL);
        assert_eq!(config.yields_base_url, DEFAULT_YIELDS_BASE_URL);
        assert!(config.lgns_page_url.is_none());
        assert_eq!(config.browser, BrowserConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("STAKESIM_CURRENCY", "USD"),
            ("STAKESIM_CURRENCY_SYMBOL", "$"),
            ("LGNS_PAGE_URL", "https://example.org/stake"),
            ("LGNS_REBASES_PER_DAY", "3"),
            ("BROWSER_WAIT_TIMEOUT_SECS", "12"),
            ("BROWSER_POLL_INTERVAL_MS", " "),
        ]))
        .unwrap();

        assert_eq!(config.currency, "usd");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.lgns_page_url.as_deref(), Some("https://example.org/stake"));
        assert_eq!(config.lgns_rebases_per_day, Some(3));
        assert_eq!(config.browser.wait_timeout, Duration::from_secs(12));
        assert_eq!(config.browser.poll_interval, Duration::from_millis(DEFAULT_POLL_INTERVAL_MS));
    }

    #[test]
    fn test_malformed_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("BROWSER_WAIT_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = AppConfig::from_lookup(lookup(&[("LGNS_REBASES_PER_DAY", "0")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
