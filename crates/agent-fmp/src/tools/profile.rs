//! Tool for fetching company profiles

use agent_tools::{Result as AgentResult, Tool};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::FmpClient;
use crate::tools::{bind_params, single_result};

/// Tool for fetching detailed company metadata for a symbol
pub struct CompanyProfileTool {
    client: Arc<FmpClient>,
}

#[derive(Debug, Deserialize)]
struct ProfileParams {
    symbol: String,
}

impl CompanyProfileTool {
    /// Create a new profile tool
    pub fn new(client: Arc<FmpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for CompanyProfileTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: ProfileParams = bind_params(params)?;

        Ok(single_result(
            self.name(),
            self.client.profile(&params.symbol).await,
        ))
    }

    fn name(&self) -> &str {
        "get_company_profile"
    }

    fn description(&self) -> &str {
        "Fetch detailed company profile information for a given stock symbol: \
         price, market cap, beta, identifiers (CIK/ISIN/CUSIP), exchange, \
         industry and sector, company description, CEO, headquarters contact \
         details, IPO date, and classification flags (ETF/ADR/fund/actively \
         trading)."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol (e.g., 'AAPL')"
                }
            },
            "required": ["symbol"]
        })
    }
}
