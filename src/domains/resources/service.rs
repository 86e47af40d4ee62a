//! Resource service implementation.
//!
//! The ResourceService resolves resource URIs against the registered URI
//! templates and renders their content. Resources are defined in
//! `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resource_templates;
use super::uri_template::UriTemplate;

/// Reads a resource's content from its bound URI variables.
pub type TemplateReader = fn(&HashMap<String, String>) -> Result<String, ResourceError>;

/// An entry in the resource template registry.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// Template metadata reported to clients.
    pub template: ResourceTemplate,

    /// Parsed form of `template.raw.uri_template`.
    pub pattern: UriTemplate,

    /// Content provider.
    pub reader: TemplateReader,
}

/// Service for listing and reading resources.
pub struct ResourceService {
    templates: Vec<TemplateEntry>,
}

impl ResourceService {
    /// Create a new ResourceService with every registered template.
    pub fn new() -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");

        let templates = get_all_resource_templates()?;
        for entry in &templates {
            info!("Registering resource template: {}", entry.pattern.as_str());
        }

        Ok(Self { templates })
    }

    /// List all concrete resources.
    ///
    /// Every resource on this server is parameterized, so the list is empty;
    /// clients discover them through [`Self::list_resource_templates`].
    pub async fn list_resources(&self) -> Vec<Resource> {
        Vec::new()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates
            .iter()
            .map(|entry| entry.template.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let (entry, params) = self
            .templates
            .iter()
            .find_map(|entry| entry.pattern.matches(uri).map(|params| (entry, params)))
            .ok_or_else(|| ResourceError::not_found(uri))?;

        debug!("Resolved {} via template {}", uri, entry.pattern.as_str());
        let text = (entry.reader)(&params)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.template.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }
}
