use serde::Deserialize;

/// One entry of the `/yields` listing
///
/// Only the fields the calculator reads are kept; a missing `symbol` reads
/// as empty and a missing or null `apy` as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct YieldRecord {
    #[serde(default)]
    pub symbol: Option<String>,
    /// Annual yield as a fraction (0.28 == 28%)
    #[serde(default)]
    pub apy: Option<f64>,
}

impl YieldRecord {
    pub fn symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or("")
    }

    /// Yield scaled to percent
    pub fn apr_percent(&self) -> f64 {
        self.apy.unwrap_or(0.0) * 100.0
    }
}

/// First record whose symbol equals `symbol`, ignoring case
pub fn find_by_symbol<'a>(records: &'a [YieldRecord], symbol: &str) -> Option<&'a YieldRecord> {
    let wanted = symbol.to_lowercase();
    records.iter().find(|r| r.symbol().to_lowercase() == wanted)
}
