//! Tool for fetching peer companies

use agent_tools::{Result as AgentResult, Tool};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::FmpClient;
use crate::tools::{bind_params, list_result};

/// Tool for listing the peer companies of a symbol
pub struct StockPeersTool {
    client: Arc<FmpClient>,
}

#[derive(Debug, Deserialize)]
struct PeersParams {
    symbol: String,
}

impl StockPeersTool {
    /// Create a new peers tool
    pub fn new(client: Arc<FmpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for StockPeersTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: PeersParams = bind_params(params)?;

        Ok(list_result(
            self.name(),
            self.client.stock_peers(&params.symbol).await,
        ))
    }

    fn name(&self) -> &str {
        "get_stock_peers"
    }

    fn description(&self) -> &str {
        "Get a list of peer companies for a given stock symbol. Each entry \
         carries the peer's symbol, company name, current price, and market \
         capitalization."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol (e.g., 'AAPL' for Apple Inc.)"
                }
            },
            "required": ["symbol"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FmpConfig;

    #[test]
    fn test_tool_metadata() {
        let client = Arc::new(FmpClient::new(&FmpConfig::new("test-key")));
        let tool = StockPeersTool::new(client);

        assert_eq!(tool.name(), "get_stock_peers");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.input_schema()["required"][0], "symbol");
    }
}
