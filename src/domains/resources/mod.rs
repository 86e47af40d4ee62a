//! Resources domain module.
//!
//! Resources represent data that can be read by MCP clients. Every resource
//! on this server is parameterized by a URI template.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//! - `uri_template.rs` - `{var}` template matching

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod uri_template;

pub use definitions::ResourceTemplateDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resource_templates, resource_template_uris};
pub use service::{ResourceService, TemplateEntry, TemplateReader};
pub use uri_template::UriTemplate;
