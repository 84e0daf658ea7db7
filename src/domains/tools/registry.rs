//! Tool Registry - tool metadata and direct dispatch by name.
//!
//! The rmcp router (see `router.rs`) serves protocol sessions; the registry
//! lets in-process callers invoke the same tools with JSON arguments.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use super::definitions::TerraformDocTool;
use super::error::ToolError;
use crate::domains::terraform::DocFetcher;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    fetcher: Arc<DocFetcher>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(fetcher: Arc<DocFetcher>) -> Self {
        Self { fetcher }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![TerraformDocTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![TerraformDocTool::to_tool()]
    }

    /// Dispatch a tool call by name.
    ///
    /// Pipeline failures come back as an error `CallToolResult`, like they
    /// would over MCP; only an unknown tool or unparsable arguments are a
    /// `ToolError`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        match name {
            TerraformDocTool::NAME => {
                let args = match arguments {
                    serde_json::Value::Object(map) => map,
                    serde_json::Value::Null => Default::default(),
                    other => {
                        return Err(ToolError::invalid_arguments(format!(
                            "expected an object, got {}",
                            other
                        )));
                    }
                };
                let params = TerraformDocTool::parse_arguments(args)
                    .map_err(|e| ToolError::invalid_arguments(e.message))?;
                Ok(TerraformDocTool::execute(&self.fetcher, &params).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
