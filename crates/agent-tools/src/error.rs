//! Error types for the tool framework

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tool execution
///
/// Operational failures inside a tool (network, upstream API) are expected to
/// be absorbed into the tool's result payload by the tool itself; the variants
/// here represent caller bugs and framework-level failures, which do propagate.
#[derive(Error, Debug)]
pub enum Error {
    /// Generic error message
    #[error("{0}")]
    Generic(String),

    /// Tool parameters failed to bind (missing, extra, or mistyped arguments)
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Tool execution failed
    #[error("Tool execution failed: {0}")]
    ProcessingFailed(String),
}
