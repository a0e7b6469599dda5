//! Composite tool analyzing a stock against its peer companies

use agent_tools::{Result as AgentResult, Tool};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;

use crate::api::FmpClient;
use crate::models::CompanyPeer;
use crate::tools::{bind_params, list_result, single_result};

/// Number of peers whose profiles are fetched
const PEER_LIMIT: usize = 3;

/// Tool combining a symbol's live quote, its peer list, and the profiles of
/// its top peers into one result
///
/// The quote and peer fetches run concurrently, then the peer profiles are
/// fetched concurrently in a second phase. Each leg is fail-soft on its own:
/// a failed fetch contributes an `{"error": ...}` payload without affecting
/// the other legs.
pub struct CompetitorAnalysisTool {
    client: Arc<FmpClient>,
}

#[derive(Debug, Deserialize)]
struct CompetitorParams {
    symbol: String,
}

impl CompetitorAnalysisTool {
    /// Create a new competitor analysis tool
    pub fn new(client: Arc<FmpClient>) -> Self {
        Self { client }
    }

    async fn analyze(&self, symbol: &str) -> Value {
        let (quote, peers) = tokio::join!(
            self.client.quote(symbol),
            self.client.stock_peers(symbol),
        );

        // Kept typed before rendering: the profile fan-out needs the peer
        // symbols, and a failed peers leg means no profiles to fetch.
        let top_peers: Vec<CompanyPeer> = match &peers {
            Ok(list) => list.iter().take(PEER_LIMIT).cloned().collect(),
            Err(_) => Vec::new(),
        };

        let real_time_stock_price = single_result(self.name(), quote);
        let competitors_data = list_result(self.name(), peers);

        let profiles = futures::future::join_all(
            top_peers.iter().map(|peer| self.client.profile(&peer.symbol)),
        )
        .await;

        // join_all yields results in input order, so peers and profiles pair
        // positionally
        let competitor_profiles: Map<String, Value> = top_peers
            .iter()
            .zip(profiles)
            .map(|(peer, profile)| (peer.symbol.clone(), single_result(self.name(), profile)))
            .collect();

        json!({
            "symbol": symbol,
            "real_time_stock_price": real_time_stock_price,
            "competitors_data": competitors_data,
            "competitor_profiles": competitor_profiles,
        })
    }
}

#[async_trait]
impl Tool for CompetitorAnalysisTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: CompetitorParams = bind_params(params)?;

        Ok(self.analyze(&params.symbol).await)
    }

    fn name(&self) -> &str {
        "analyze_stock_competitors"
    }

    fn description(&self) -> &str {
        "Analyze a symbol's current stock data alongside its competitors: the \
         real-time quote, the full peer company list, and company profiles \
         for the top 3 peers, keyed by peer symbol."
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FmpConfig;

    #[test]
    fn test_tool_metadata() {
        let client = Arc::new(FmpClient::new(&FmpConfig::new("test-key")));
        let tool = CompetitorAnalysisTool::new(client);

        assert_eq!(tool.name(), "analyze_stock_competitors");
        assert!(!tool.description().is_empty());
        assert_eq!(tool.input_schema()["required"][0], "symbol");
    }
}
