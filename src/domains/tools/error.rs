//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A numeric parameter could not be coerced to an integer.
    ///
    /// The magic matrix tool reports this as a result value rather than
    /// failing the call.
    #[error("Invalid parameter: {0}. Must be a number.")]
    InvalidParameter(String),

    /// The remote numeric service could not be reached, returned a
    /// non-success status, or sent a body that is not JSON.
    #[error("Remote service failure: {0}")]
    RemoteService(#[from] reqwest::Error),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "invalid parameter" error from the offending input.
    pub fn invalid_parameter(input: impl Into<String>) -> Self {
        Self::InvalidParameter(input.into())
    }

    /// Whether this error must fail the whole tool call.
    pub fn is_transport_fault(&self) -> bool {
        matches!(self, Self::RemoteService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = ToolError::invalid_parameter("abc");
        assert_eq!(err.to_string(), "Invalid parameter: abc. Must be a number.");
        assert!(!err.is_transport_fault());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ToolError::not_found("nope").to_string(), "Unknown tool: nope");
    }
}
