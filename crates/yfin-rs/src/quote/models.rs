//! Quote module models.
//!
//! Data structures for the chart endpoint, used here only for its `meta`
//! block (instrument name, currency, last traded price).

use serde::Deserialize;


#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartResult,
}


#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub result: Option<Vec<ChartEntry>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}


#[derive(Debug, Clone, Deserialize)]
pub struct ChartEntry {
    pub meta: Quote,
}


/// Instrument metadata and last price.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub symbol: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "shortName", default)]
    pub short_name: Option<String>,
    #[serde(rename = "longName", default)]
    pub long_name: Option<String>,
    #[serde(rename = "regularMarketPrice", default)]
    pub regular_market_price: Option<f64>,
    #[serde(rename = "exchangeName", default)]
    pub exchange_name: Option<String>,
}
