//! Configuration management for the MCP server.
//!
//! Configuration is populated from defaults, then overridden by `MCP_*`
//! environment variables (a `.env` file is loaded first if present).

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Base URL of the public magic-square service.
pub const DEFAULT_MATLAB_SERVICE_URL: &str = "https://matlab-0j1h.onrender.com";

/// Request timeout for the numeric service, in seconds.
pub const DEFAULT_MATLAB_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote numeric service used by the magic matrix tool.
    pub matlab: MatlabServiceConfig,

    /// Environment values ignored by [`Config::from_env`]. Logging is not set
    /// up while the config loads, so callers report these afterwards.
    #[serde(skip)]
    load_warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Remote numeric service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatlabServiceConfig {
    /// Base URL; `/mymagic/mymagic` is appended per request.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for MatlabServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MATLAB_SERVICE_URL.to_string(),
            timeout_secs: DEFAULT_MATLAB_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Echo Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            matlab: MatlabServiceConfig::default(),
            load_warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("MCP_MATLAB_SERVICE_URL") {
            config.matlab.base_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_MATLAB_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.matlab.timeout_secs = secs,
                Err(_) => config.load_warnings.push(format!(
                    "Ignoring invalid MCP_MATLAB_TIMEOUT_SECS '{}', using {}s",
                    timeout, config.matlab.timeout_secs
                )),
            }
        }

        config
    }

    /// Values [`Config::from_env`] could not use and replaced by defaults.
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    /// Check values that would otherwise only fail at the first tool call.
    pub fn validate(&self) -> Result<()> {
        let url = &self.matlab.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config(format!(
                "numeric service URL must be http(s), got '{}'",
                url
            )));
        }
        if self.matlab.timeout_secs == 0 {
            return Err(Error::config("numeric service timeout must be at least 1 second"));
        }
        Ok(())
    }
}
