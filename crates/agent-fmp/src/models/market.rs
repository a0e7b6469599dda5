//! Exchange trading-session records

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Trading-session status for one exchange, returned by
/// `/exchange-market-hours` and `/all-exchange-market-hours`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHours {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Opening hour with timezone offset, e.g. "09:30 AM -05:00"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_market_open: Option<bool>,
    /// Upstream fields outside the declared set, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
