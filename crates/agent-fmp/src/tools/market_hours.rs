//! Tools for fetching exchange trading-session status

use agent_tools::{Result as AgentResult, Tool};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::FmpClient;
use crate::tools::{bind_params, list_result, single_result};

/// Tool for fetching the current market status of one exchange
pub struct MarketStatusTool {
    client: Arc<FmpClient>,
}

#[derive(Debug, Deserialize)]
struct MarketStatusParams {
    exchange: String,
}

impl MarketStatusTool {
    /// Create a new market status tool
    pub fn new(client: Arc<FmpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for MarketStatusTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: MarketStatusParams = bind_params(params)?;

        Ok(single_result(
            self.name(),
            self.client.market_hours(&params.exchange).await,
        ))
    }

    fn name(&self) -> &str {
        "get_market_status"
    }

    fn description(&self) -> &str {
        "Fetch the current market status for a given stock exchange: opening \
         and closing hours with timezone offset, the exchange timezone, and \
         whether the market is currently open."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "exchange": {
                    "type": "string",
                    "description": "Stock exchange symbol (e.g., 'NASDAQ')"
                }
            },
            "required": ["exchange"]
        })
    }
}

/// Tool for fetching the current market status of every exchange
pub struct AllMarketStatusTool {
    client: Arc<FmpClient>,
}

impl AllMarketStatusTool {
    /// Create a new all-exchanges market status tool
    pub fn new(client: Arc<FmpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for AllMarketStatusTool {
    async fn execute(&self, _params: Value) -> AgentResult<Value> {
        Ok(list_result(self.name(), self.client.all_market_hours().await))
    }

    fn name(&self) -> &str {
        "get_all_market_status"
    }

    fn description(&self) -> &str {
        "Fetch the current market status of all stock exchanges: opening and \
         closing hours, timezone, and whether each market is currently open."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }
}
