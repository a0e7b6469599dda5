//! Configuration for the FMP data client

use crate::error::{FmpError, Result};
use serde::{Deserialize, Serialize};

/// Default base URL for the FMP stable API
pub const FMP_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Configuration for FMP API access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FmpConfig {
    /// Base URL of the FMP API
    pub base_url: String,

    /// Static API key sent as a query parameter on every request
    pub api_key: String,
}

impl FmpConfig {
    /// Create a configuration with the default base URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: FMP_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create from the FMP_API_KEY environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("FMP_API_KEY").map_err(|_| {
            FmpError::Config("FMP_API_KEY environment variable not set".to_string())
        })?;

        Ok(Self::new(api_key))
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
