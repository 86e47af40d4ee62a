//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No registered resource or template matches the URI.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A resource URI template could not be parsed.
    #[error("Invalid URI template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// A template variable required by the resource is missing.
    #[error("Missing URI parameter: {0}")]
    MissingParameter(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid template" error.
    pub fn invalid_template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "missing parameter" error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }
}
