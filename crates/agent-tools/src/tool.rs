//! Tool trait definition

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for tools that agents can execute
///
/// Tools are functions that LLM agents can call to interact with the world.
/// Each tool must provide a name, description, and JSON schema for its input.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Execute the tool with given parameters
    ///
    /// # Arguments
    ///
    /// * `params` - Tool input as JSON value (should match input_schema)
    ///
    /// # Returns
    ///
    /// Tool output as JSON value. Tools that talk to external services are
    /// expected to be fail-soft: an upstream failure becomes an
    /// `{"error": "..."}` payload, not an `Err`. An `Err` from this method
    /// means the caller supplied arguments the tool could not bind.
    async fn execute(&self, params: Value) -> Result<Value>;

    /// Get the tool's name
    ///
    /// Must be unique within a ToolRegistry.
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the LLM understand when to use this tool
    fn description(&self) -> &str;

    /// Get the tool's input schema (JSON Schema format)
    ///
    /// Describes the parameters this tool expects. The LLM uses this schema
    /// to generate valid tool calls.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    ///
    /// // Example schema for a quote tool:
    /// let schema = json!({
    ///     "type": "object",
    ///     "properties": {
    ///         "symbol": { "type": "string" }
    ///     },
    ///     "required": ["symbol"]
    /// });
    /// ```
    fn input_schema(&self) -> Value;
}
