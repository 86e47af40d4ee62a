//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only lists them.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{EchoTool, MagicMatrixTool, matlab::MatlabClient};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(matlab: MatlabClient) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(EchoTool::create_route())
        .with_route(MagicMatrixTool::create_route(matlab))
}
