use std::collections::HashMap;

/// Body of `GET /simple/price`: token id -> currency -> price
pub type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// Pick one price out of a `/simple/price` body
pub fn extract_price(body: &SimplePriceResponse, token_id: &str, currency: &str) -> Option<f64> {
    body.get(token_id)?.get(currency).copied()
}
