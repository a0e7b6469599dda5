//! Real-time quote records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Point-in-time price snapshot returned by `/quote`
///
/// Upstream fields pass through unchanged: absent fields stay absent on
/// serialize, and fields outside the declared set are retained in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_avg50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_avg200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
    /// UNIX timestamp of the quote
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Upstream fields outside the declared set, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
