//! FMP endpoint client

use crate::client::ApiClient;
use crate::config::FmpConfig;
use crate::error::Result;
use crate::models::{CompanyPeer, CompanyProfile, CompanySearchResult, MarketHours, StockQuote};

/// Result-count limit applied to company name search
const SEARCH_LIMIT: &str = "5";

/// Typed client for the FMP endpoints used by the lookup tools
///
/// Endpoints that return a JSON array but conceptually yield one entity
/// (quote, profile, market hours by exchange) surface the first element, or
/// `None` when the array is empty.
#[derive(Debug, Clone)]
pub struct FmpClient {
    api: ApiClient,
}

impl FmpClient {
    /// Create a client from configuration
    pub fn new(config: &FmpConfig) -> Self {
        Self {
            api: ApiClient::new(config.base_url.as_str())
                .with_default_param("apikey", config.api_key.as_str()),
        }
    }

    /// Create from the FMP_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(&FmpConfig::from_env()?))
    }

    /// Real-time quote for a symbol
    pub async fn quote(&self, symbol: &str) -> Result<Option<StockQuote>> {
        let quotes: Vec<StockQuote> = self
            .api
            .get("/quote", &[("symbol", symbol)])
            .await?
            .json()
            .await?;
        Ok(quotes.into_iter().next())
    }

    /// Peer companies for a symbol
    pub async fn stock_peers(&self, symbol: &str) -> Result<Vec<CompanyPeer>> {
        let peers = self
            .api
            .get("/stock-peers", &[("symbol", symbol)])
            .await?
            .json()
            .await?;
        Ok(peers)
    }

    /// Company profile for a symbol
    pub async fn profile(&self, symbol: &str) -> Result<Option<CompanyProfile>> {
        let profiles: Vec<CompanyProfile> = self
            .api
            .get("/profile", &[("symbol", symbol)])
            .await?
            .json()
            .await?;
        Ok(profiles.into_iter().next())
    }

    /// Trading-session status for one exchange
    pub async fn market_hours(&self, exchange: &str) -> Result<Option<MarketHours>> {
        let exchanges: Vec<MarketHours> = self
            .api
            .get("/exchange-market-hours", &[("exchange", exchange)])
            .await?
            .json()
            .await?;
        Ok(exchanges.into_iter().next())
    }

    /// Trading-session status for all exchanges
    pub async fn all_market_hours(&self) -> Result<Vec<MarketHours>> {
        let exchanges = self
            .api
            .get("/all-exchange-market-hours", &[])
            .await?
            .json()
            .await?;
        Ok(exchanges)
    }

    /// Companies matching a name or partial name
    pub async fn search_name(&self, query: &str) -> Result<Vec<CompanySearchResult>> {
        let matches = self
            .api
            .get("/search-name", &[("query", query), ("limit", SEARCH_LIMIT)])
            .await?
            .json()
            .await?;
        Ok(matches)
    }
}
