//! Tool for fetching real-time stock quotes

use agent_tools::{Result as AgentResult, Tool};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::FmpClient;
use crate::tools::{bind_params, single_result};

/// Tool for fetching the real-time price snapshot of a symbol
pub struct RealTimeQuoteTool {
    client: Arc<FmpClient>,
}

#[derive(Debug, Deserialize)]
struct QuoteParams {
    symbol: String,
}

impl RealTimeQuoteTool {
    /// Create a new quote tool
    pub fn new(client: Arc<FmpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for RealTimeQuoteTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: QuoteParams = bind_params(params)?;

        Ok(single_result(
            self.name(),
            self.client.quote(&params.symbol).await,
        ))
    }

    fn name(&self) -> &str {
        "get_real_time_stock_price"
    }

    fn description(&self) -> &str {
        "Get the real-time stock price for a given symbol. Returns the price, \
         absolute and percentage change, volume, day and 52-week ranges, \
         market cap, 50/200-day moving averages, exchange, open, previous \
         close, and a UNIX timestamp."
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
