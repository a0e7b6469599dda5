//! Concurrent batch dispatch over a tool registry

use crate::{Error, Result, Tool, ToolRegistry};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// One entry in a batch dispatch request
#[derive(Debug, Clone, Deserialize)]
pub struct ToolInvocation {
    /// Name of the registered tool to invoke. A dotted path is tolerated;
    /// only the last segment is used for lookup.
    pub tool_name: String,
    /// Keyword arguments for the tool, as a JSON object
    #[serde(default = "empty_args")]
    pub args: Value,
}

fn empty_args() -> Value {
    Value::Object(Map::new())
}

#[derive(Debug, Deserialize)]
struct CompoundParams {
    tools_config: Vec<ToolInvocation>,
}

/// Tool that executes a batch of other tools concurrently
///
/// Every resolved invocation is spawned as its own task before any of them is
/// awaited, so independent lookups overlap at their I/O boundaries. Results
/// come back in the same order the invocations appeared in the request, never
/// in completion order.
///
/// Invocations naming an unregistered tool (or this dispatcher itself) are
/// skipped and produce no result slot. A tool whose arguments fail to bind
/// propagates its error out of the whole batch; operational failures inside a
/// tool never do, because every lookup tool is fail-soft.
pub struct CompoundTool {
    registry: Arc<ToolRegistry>,
}

impl CompoundTool {
    /// Agent-facing name of the dispatcher
    pub const NAME: &'static str = "compound_tools";

    /// Create a dispatcher over the given registry
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve a request's tool name against the registry
    fn resolve(&self, tool_name: &str) -> Option<Arc<dyn Tool>> {
        let name = tool_name.rsplit('.').next().unwrap_or(tool_name);
        if name == Self::NAME {
            // no recursive self-dispatch
            return None;
        }
        self.registry.get(name)
    }
}

#[async_trait]
impl Tool for CompoundTool {
    async fn execute(&self, params: Value) -> Result<Value> {
        let params: CompoundParams =
            serde_json::from_value(params).map_err(|e| Error::InvalidParameters(e.to_string()))?;

        tracing::debug!(batch = params.tools_config.len(), "dispatching tool batch");

        let mut handles = Vec::with_capacity(params.tools_config.len());
        for config in params.tools_config {
            match self.resolve(&config.tool_name) {
                Some(tool) => {
                    let args = config.args;
                    handles.push(tokio::spawn(async move { tool.execute(args).await }));
                }
                None => {
                    tracing::warn!(tool = %config.tool_name, "skipping unknown tool in batch");
                }
            }
        }

        // join_all yields results in launch order regardless of completion order
        let mut results = Vec::with_capacity(handles.len());
        for joined in futures::future::join_all(handles).await {
            let result =
                joined.map_err(|e| Error::ProcessingFailed(format!("batch task failed: {e}")))??;
            results.push(result);
        }

        Ok(Value::Array(results))
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Execute multiple tools concurrently in one call. Use this whenever \
         several independent tool calls can run at the same time. Returns a \
         list with each tool's result, in the same order as the request."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "tools_config": {
                    "type": "array",
                    "description": "Tool invocations to run concurrently",
                    "items": {
                        "type": "object",
                        "properties": {
                            "tool_name": {
                                "type": "string",
                                "description": "Name of the tool to invoke"
                            },
                            "args": {
                                "type": "object",
                                "description": "Arguments for the tool"
                            }
                        },
                        "required": ["tool_name"]
                    }
                }
            },
            "required": ["tools_config"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{Instant, sleep};

    /// Test tool that waits `delay_ms` and then reports its label
    struct SlowTool {
        label: &'static str,
        delay_ms: u64,
    }

    #[async_trait]
    impl Tool for SlowTool {
        async fn execute(&self, _params: Value) -> Result<Value> {
            sleep(Duration::from_millis(self.delay_ms)).await;
            Ok(json!({ "tool": self.label }))
        }

        fn name(&self) -> &str {
            self.label
        }

        fn description(&self) -> &str {
            "Sleeps, then reports its own name"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object" })
        }
    }

    /// Test tool that rejects every parameter binding
    struct StrictTool;

    #[async_trait]
    impl Tool for StrictTool {
        async fn execute(&self, _params: Value) -> Result<Value> {
            Err(Error::InvalidParameters("unexpected field `bogus`".into()))
        }

        fn name(&self) -> &str {
            "strict"
        }

        fn description(&self) -> &str {
            "Always fails argument binding"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object" })
        }
    }

    fn registry() -> Arc<ToolRegistry> {
        let registry = Arc::new(ToolRegistry::new());
        registry.register(Arc::new(SlowTool { label: "alpha", delay_ms: 80 }));
        registry.register(Arc::new(SlowTool { label: "beta", delay_ms: 10 }));
        registry.register(Arc::new(SlowTool { label: "gamma", delay_ms: 40 }));
        registry
    }

    #[test]
    fn test_tool_metadata() {
        let tool = CompoundTool::new(registry());
        assert_eq!(tool.name(), "compound_tools");
        assert!(!tool.description().is_empty());

        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["tools_config"].is_object());
    }

    #[tokio::test]
    async fn test_results_preserve_request_order() {
        let tool = CompoundTool::new(registry());

        // beta completes first, alpha last; output order must match input order
        let params = json!({
            "tools_config": [
                { "tool_name": "alpha", "args": {} },
                { "tool_name": "beta", "args": {} },
                { "tool_name": "gamma", "args": {} }
            ]
        });

        let result = tool.execute(params).await.expect("batch should succeed");
        let results = result.as_array().expect("array result");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0]["tool"], "alpha");
        assert_eq!(results[1]["tool"], "beta");
        assert_eq!(results[2]["tool"], "gamma");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_skipped() {
        let tool = CompoundTool::new(registry());

        let params = json!({
            "tools_config": [
                { "tool_name": "alpha" },
                { "tool_name": "does_not_exist" },
                { "tool_name": "gamma" }
            ]
        });

        let result = tool.execute(params).await.expect("batch should succeed");
        let results = result.as_array().expect("array result");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["tool"], "alpha");
        assert_eq!(results[1]["tool"], "gamma");
    }

    #[tokio::test]
    async fn test_dotted_tool_name_resolves_last_segment() {
        let tool = CompoundTool::new(registry());

        let params = json!({
            "tools_config": [
                { "tool_name": "agents.fmp.beta", "args": {} }
            ]
        });

        let result = tool.execute(params).await.expect("batch should succeed");
        assert_eq!(result[0]["tool"], "beta");
    }

    #[tokio::test]
    async fn test_no_recursive_self_dispatch() {
        let registry = registry();
        let tool = CompoundTool::new(Arc::clone(&registry));
        registry.register(Arc::new(CompoundTool::new(Arc::clone(&registry))));

        let params = json!({
            "tools_config": [
                { "tool_name": "compound_tools", "args": { "tools_config": [] } },
                { "tool_name": "beta" }
            ]
        });

        let result = tool.execute(params).await.expect("batch should succeed");
        let results = result.as_array().expect("array result");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["tool"], "beta");
    }

    #[tokio::test]
    async fn test_invocations_run_concurrently() {
        let tool = CompoundTool::new(registry());

        let params = json!({
            "tools_config": [
                { "tool_name": "alpha" },
                { "tool_name": "gamma" }
            ]
        });

        let start = Instant::now();
        tool.execute(params).await.expect("batch should succeed");
        let elapsed = start.elapsed();

        // Sequential execution would take ~120ms; concurrent stays near the
        // slower leg (80ms).
        assert!(
            elapsed < Duration::from_millis(115),
            "batch took {elapsed:?}, expected concurrent execution"
        );
    }

    #[tokio::test]
    async fn test_binding_error_propagates() {
        let registry = registry();
        registry.register(Arc::new(StrictTool));
        let tool = CompoundTool::new(registry);

        let params = json!({
            "tools_config": [
                { "tool_name": "beta" },
                { "tool_name": "strict", "args": { "bogus": 1 } }
            ]
        });

        let result = tool.execute(params).await;
        assert!(matches!(result, Err(Error::InvalidParameters(_))));
    }

    #[tokio::test]
    async fn test_malformed_batch_params_rejected() {
        let tool = CompoundTool::new(registry());

        let result = tool.execute(json!({ "tools_config": "not-a-list" })).await;
        assert!(matches!(result, Err(Error::InvalidParameters(_))));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let tool = CompoundTool::new(registry());

        let result = tool
            .execute(json!({ "tools_config": [] }))
            .await
            .expect("empty batch should succeed");
        assert_eq!(result, json!([]));
    }
}
