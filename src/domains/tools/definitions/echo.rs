//! Echo tool definition.
//!
//! Returns its input unchanged. Useful for checking that a client can reach
//! the server and round-trip arguments.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::success_result;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the echo tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EchoParams {
    /// The text to echo.
    #[schemars(description = "The text to echo")]
    pub text: String,
}

/// Echo tool - returns the input text as-is.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "echo";

    /// Human-readable title.
    pub const TITLE: &'static str = "Echo Tool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Echo the input text";

    /// The echo itself.
    pub fn echo(text: &str) -> String {
        text.to_string()
    }

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(len = params.text.len()))]
    pub fn execute(params: &EchoParams) -> CallToolResult {
        info!("Echo tool called");
        success_result(Self::echo(&params.text))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let text = arguments
            .get("text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_arguments("Missing or invalid 'text' parameter"))?
            .to_string();

        let result = Self::execute(&EchoParams { text });
        Ok(super::common::to_http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EchoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: EchoParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
