//! Magic matrix MCP server library.
//!
//! A Model Context Protocol server offering an echo tool, a magic square
//! tool backed by a remote numeric service, a templated greeting resource
//! and a greeting prompt.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: `echo` and `calculate_magic_matrix`
//!   - **resources**: the `greeting://{name}` template
//!   - **prompts**: the `greet_user` prompt
//!
//! # Example
//!
//! ```rust,no_run
//! use magic_matrix_mcp::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
