//! Financial Modeling Prep market-data tools for LLM agents
//!
//! This crate exposes FMP market-data lookups as [`agent_tools::Tool`]
//! implementations an agent runtime can bind against:
//!
//! - Real-time stock quotes (`get_real_time_stock_price`)
//! - Peer company listings (`get_stock_peers`)
//! - Company profiles (`get_company_profile`)
//! - Exchange trading hours, single and all (`get_market_status`,
//!   `get_all_market_status`)
//! - Company name search (`search_company_name`)
//! - Competitor analysis combining quote, peers, and top-peer profiles
//!   (`analyze_stock_competitors`)
//! - Concurrent batch dispatch of the above (`compound_tools`)
//!
//! All lookup tools are fail-soft: upstream failures come back as
//! `{"error": "..."}` payloads rather than errors, so concurrent callers are
//! never blocked by one failed leg.
//!
//! # Example
//!
//! ```rust,ignore
//! use agent_fmp::{FmpConfig, fmp_tools};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = fmp_tools(&FmpConfig::from_env()?);
//!
//!     let quote_tool = registry.get("get_real_time_stock_price").unwrap();
//!     let quote = quote_tool.execute(json!({ "symbol": "AAPL" })).await?;
//!     println!("{quote}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tools;

// Re-export main types for convenience
pub use api::FmpClient;
pub use client::ApiClient;
pub use config::FmpConfig;
pub use error::{FmpError, Result};

use agent_tools::{CompoundTool, ToolRegistry};
use std::sync::Arc;

/// Build the registry of FMP tools exposed to the agent runtime
///
/// Registers the six lookup tools, the competitor analysis tool, and a
/// [`CompoundTool`] dispatching over the same registry. All tools share one
/// [`FmpClient`].
pub fn fmp_tools(config: &FmpConfig) -> Arc<ToolRegistry> {
    let client = Arc::new(FmpClient::new(config));
    let registry = Arc::new(ToolRegistry::new());

    registry.register(Arc::new(tools::RealTimeQuoteTool::new(Arc::clone(&client))));
    registry.register(Arc::new(tools::StockPeersTool::new(Arc::clone(&client))));
    registry.register(Arc::new(tools::CompanyProfileTool::new(Arc::clone(&client))));
    registry.register(Arc::new(tools::MarketStatusTool::new(Arc::clone(&client))));
    registry.register(Arc::new(tools::AllMarketStatusTool::new(Arc::clone(&client))));
    registry.register(Arc::new(tools::CompanySearchTool::new(Arc::clone(&client))));
    registry.register(Arc::new(tools::CompetitorAnalysisTool::new(client)));
    registry.register(Arc::new(CompoundTool::new(Arc::clone(&registry))));

    registry
}
