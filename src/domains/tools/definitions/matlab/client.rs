//! Client for the remote MATLAB Production Server style numeric service.
//!
//! One POST per call, no retries. Any transport fault, non-success status or
//! non-JSON body is returned as [`ToolError::RemoteService`].

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::core::config::MatlabServiceConfig;
use crate::domains::tools::ToolError;

/// Path of the magic square function on the service.
pub const MAGIC_PATH: &str = "/mymagic/mymagic";

/// Request body understood by the service: one output, one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRequest {
    pub nargout: u32,
    pub rhs: [i64; 1],
}

impl MatrixRequest {
    pub fn new(n: i64) -> Self {
        Self {
            nargout: 1,
            rhs: [n],
        }
    }
}

/// Coerce a tool argument into the integer sent to the service.
///
/// Integers pass through, finite floats truncate toward zero, booleans count
/// as 0/1 and strings must hold a base-10 integer (surrounding whitespace is
/// ignored).
pub fn coerce_parameter(value: &Value) -> Result<i64, ToolError> {
    let coerced = match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };

    coerced.ok_or_else(|| match value {
        Value::String(text) => ToolError::invalid_parameter(text.as_str()),
        other => ToolError::invalid_parameter(other.to_string()),
    })
}

/// HTTP client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct MatlabClient {
    http: reqwest::Client,
    endpoint: String,
}

impl MatlabClient {
    /// Build a client with the configured timeout.
    pub fn new(config: &MatlabServiceConfig) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), MAGIC_PATH),
        })
    }

    /// Full URL the magic function is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the service for the magic square of order `n`.
    ///
    /// Returns the response envelope exactly as received.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn magic(&self, n: i64) -> Result<Value, ToolError> {
        info!("Requesting magic matrix of order {}", n);

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&MatrixRequest::new(n))
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                error!("Numeric service request failed: {}", e);
                ToolError::from(e)
            })?;

        response.json::<Value>().await.map_err(|e| {
            error!("Numeric service returned an unreadable body: {}", e);
            ToolError::from(e)
        })
    }
}
