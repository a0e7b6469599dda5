//! FMP lookup tools for LLM agents
//!
//! Every tool here is fail-soft: an upstream failure (network, non-2xx
//! status, malformed body) becomes an `{"error": "..."}` result payload, so
//! batch and composite callers always receive a value for every launched
//! invocation. Only argument-binding failures propagate as hard errors.

pub mod competitors;
pub mod market_hours;
pub mod peers;
pub mod profile;
pub mod quote;
pub mod search;

pub use competitors::CompetitorAnalysisTool;
pub use market_hours::{AllMarketStatusTool, MarketStatusTool};
pub use peers::StockPeersTool;
pub use profile::CompanyProfileTool;
pub use quote::RealTimeQuoteTool;
pub use search::CompanySearchTool;

use crate::error::FmpError;
use agent_tools::Error;
use serde::Serialize;
use serde_json::{Value, json};

/// Bind tool parameters, mapping serde failures to a hard error
pub(crate) fn bind_params<T: serde::de::DeserializeOwned>(
    params: Value,
) -> agent_tools::Result<T> {
    serde_json::from_value(params).map_err(|e| Error::InvalidParameters(e.to_string()))
}

/// Convert an upstream failure into the fail-soft error payload
fn soft_error(tool: &str, err: &FmpError) -> Value {
    tracing::warn!(tool, error = %err, "tool call failed");
    json!({ "error": err.to_string() })
}

/// Render a single-entity lookup result: first element, `null` when the
/// upstream array was empty, `{"error": ...}` on failure
pub(crate) fn single_result<T: Serialize>(
    tool: &str,
    result: crate::error::Result<Option<T>>,
) -> Value {
    let rendered = result.and_then(|record| {
        record
            .map(|r| serde_json::to_value(r).map_err(FmpError::from))
            .transpose()
    });

    match rendered {
        Ok(Some(value)) => value,
        Ok(None) => Value::Null,
        Err(e) => soft_error(tool, &e),
    }
}

/// Render a collection lookup result: the array unchanged, or
/// `{"error": ...}` on failure
pub(crate) fn list_result<T: Serialize>(
    tool: &str,
    result: crate::error::Result<Vec<T>>,
) -> Value {
    match result.and_then(|list| serde_json::to_value(list).map_err(FmpError::from)) {
        Ok(value) => value,
        Err(e) => soft_error(tool, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_single_result_first_or_null() {
        let value = single_result("t", Ok(Some(json!({ "symbol": "AAPL" }))));
        assert_eq!(value["symbol"], "AAPL");

        let value = single_result::<Value>("t", Ok(None));
        assert!(value.is_null());
    }

    #[test]
    fn test_failures_become_error_payloads() {
        let err = FmpError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "upstream down".to_string(),
        };
        let value = single_result::<Value>("t", Err(err));
        let message = value["error"].as_str().expect("error message");
        assert!(message.contains("500"));

        let err = FmpError::Config("bad".to_string());
        let value = list_result::<Value>("t", Err(err));
        assert!(value["error"].as_str().is_some());
    }

    #[test]
    fn test_bind_params_rejects_missing_fields() {
        #[derive(serde::Deserialize)]
        struct Params {
            #[allow(dead_code)]
            symbol: String,
        }

        let bound: agent_tools::Result<Params> = bind_params(json!({}));
        assert!(matches!(bound, Err(Error::InvalidParameters(_))));
    }
}
