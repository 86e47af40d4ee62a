//! Resource definitions module.
//!
//! Each templated resource is defined in its own file with:
//! - URI template and metadata
//! - A reader producing the content from the bound URI variables
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceTemplateDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

use std::collections::HashMap;

use super::error::ResourceError;

pub mod greeting;

pub use greeting::GreetingResource;

/// Trait for parameterized resource definitions.
pub trait ResourceTemplateDefinition {
    /// The RFC 6570 URI template, e.g. `greeting://{name}`.
    const URI_TEMPLATE: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Produce the content for the given URI variables.
    fn read(params: &HashMap<String, String>) -> Result<String, ResourceError>;
}
