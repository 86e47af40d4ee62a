//! Common helpers shared across tool definitions.
//!
//! Result builders keep the shape of `CallToolResult` consistent between
//! tools and between the rmcp and HTTP dispatch paths.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result carrying `data` as structured content.
///
/// The same data is rendered as pretty JSON in the text content so clients
/// that ignore `structuredContent` still see the full mapping.
pub fn structured_result<T: Serialize>(data: &T) -> CallToolResult {
    let value = match serde_json::to_value(data) {
        Ok(value) => value,
        Err(e) => return error_result(&format!("Failed to serialize tool output: {}", e)),
    };
    let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());

    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.structured_content = Some(value);
    result
}

/// Render a `CallToolResult` the way the HTTP transport returns it.
#[cfg(feature = "http")]
pub fn to_http_response(result: CallToolResult) -> serde_json::Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let (Some(structured), Some(object)) =
        (result.structured_content, response.as_object_mut())
    {
        object.insert("structuredContent".to_string(), structured);
    }

    response
}

/// Extract the first text block of a result.
#[cfg(test)]
pub(crate) fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|content| match &content.raw {
        rmcp::model::RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}
