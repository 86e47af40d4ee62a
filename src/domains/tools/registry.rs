//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::{EchoTool, MagicMatrixTool, matlab::MatlabClient};
#[cfg(feature = "http")]
use super::ToolError;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    matlab: MatlabClient,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(matlab: MatlabClient) -> Self {
        Self { matlab }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![EchoTool::NAME, MagicMatrixTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![EchoTool::to_tool(), MagicMatrixTool::to_tool()]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// `Err` becomes the JSON-RPC error object; tool-level failures that are
    /// part of the result (such as an invalid parameter) come back as `Ok`.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            EchoTool::NAME => EchoTool::http_handler(arguments),
            MagicMatrixTool::NAME => {
                MagicMatrixTool::http_handler(arguments, &self.matlab).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
