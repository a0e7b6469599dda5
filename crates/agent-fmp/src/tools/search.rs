//! Tool for searching companies by name

use agent_tools::{Result as AgentResult, Tool};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::FmpClient;
use crate::tools::{bind_params, list_result};

/// Tool for finding company symbols by name
pub struct CompanySearchTool {
    client: Arc<FmpClient>,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    company_name: String,
}

impl CompanySearchTool {
    /// Create a new company search tool
    pub fn new(client: Arc<FmpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for CompanySearchTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: SearchParams = bind_params(params)?;

        Ok(list_result(
            self.name(),
            self.client.search_name(&params.company_name).await,
        ))
    }

    fn name(&self) -> &str {
        "search_company_name"
    }

    fn description(&self) -> &str {
        "Search for companies matching the given name and return matching \
         company details (symbol, name, currency, exchange). Use this tool to \
         identify a company's ticker symbol."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "company_name": {
                    "type": "string",
                    "description": "Name or partial name of the company to search for"
                }
            },
            "required": ["company_name"]
        })
    }
}
