//! Magic matrix tool definition.
//!
//! Forwards the requested order to the numeric service and reshapes the
//! answer into a nested row-major list.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::client::{MatlabClient, coerce_parameter};
use super::reshape::normalize;
use crate::domains::tools::ToolError;
use crate::domains::tools::definitions::common::structured_result;

/// Parameters for the magic matrix tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MagicMatrixParams {
    /// Order of the magic square. Kept as raw JSON so bad input becomes an
    /// error mapping instead of a schema failure.
    #[schemars(with = "f64", description = "Size of the magic square to compute")]
    pub in_param: serde_json::Value,
}

/// Result returned when `in_param` is not a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidParameterResult {
    pub error: String,
}

/// Magic matrix tool - remote computation plus reshape.
pub struct MagicMatrixTool;

impl MagicMatrixTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calculate_magic_matrix";

    /// Human-readable title.
    pub const TITLE: &'static str = "Magic Matrix";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Calculate Magic Matrix";

    /// Execute the tool logic.
    ///
    /// Only remote service faults are returned as `Err`; every data problem is
    /// encoded in the successful result.
    #[instrument(skip_all, fields(in_param = %params.in_param))]
    pub async fn execute(
        params: &MagicMatrixParams,
        client: &MatlabClient,
    ) -> Result<CallToolResult, ToolError> {
        info!("Magic matrix tool called");

        let n = match coerce_parameter(&params.in_param) {
            Ok(n) => n,
            Err(e) => {
                warn!("{}", e);
                return Ok(structured_result(&InvalidParameterResult {
                    error: e.to_string(),
                }));
            }
        };

        let raw = client.magic(n).await?;
        let result = normalize(raw);

        info!(
            reshaped = result.is_reshaped(),
            "Magic matrix computed for n={}", n
        );
        Ok(structured_result(&result))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &MatlabClient,
    ) -> Result<serde_json::Value, ToolError> {
        let in_param = arguments
            .get("in_param")
            .cloned()
            .ok_or_else(|| ToolError::invalid_arguments("Missing 'in_param' parameter"))?;

        let result = Self::execute(&MagicMatrixParams { in_param }, client).await?;

        Ok(super::super::common::to_http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MagicMatrixParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }

    /// Handle an rmcp tool call: bad arguments are `invalid_params`, a remote
    /// service fault is `internal_error`.
    pub async fn call(
        arguments: Option<JsonObject>,
        client: MatlabClient,
    ) -> Result<CallToolResult, McpError> {
        let params: MagicMatrixParams =
            serde_json::from_value(serde_json::Value::Object(arguments.unwrap_or_default()))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        Self::execute(&params, &client)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    ///
    /// The client is built once and cloned per call; clones share one
    /// connection pool.
    pub fn create_route<S>(client: MatlabClient) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            Self::call(ctx.arguments.clone(), client.clone()).boxed()
        })
    }
}
