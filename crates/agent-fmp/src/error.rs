//! Error types for FMP data operations

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the FMP API
#[derive(Debug, Error)]
pub enum FmpError {
    /// Upstream responded with a non-success status
    #[error("FMP returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for FMP operations
pub type Result<T> = std::result::Result<T, FmpError>;

/// Convert FmpError into the tool framework's error
impl From<FmpError> for agent_tools::Error {
    fn from(err: FmpError) -> Self {
        agent_tools::Error::ProcessingFailed(err.to_string())
    }
}
