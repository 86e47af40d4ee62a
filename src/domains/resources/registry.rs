//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resource_templates()`

use rmcp::model::{AnnotateAble, RawResourceTemplate};

use super::definitions::{GreetingResource, ResourceTemplateDefinition};
use super::error::ResourceError;
use super::service::TemplateEntry;
use super::uri_template::UriTemplate;

/// Build a registry entry from a definition.
fn build_template<R: ResourceTemplateDefinition>() -> Result<TemplateEntry, ResourceError> {
    let template = RawResourceTemplate {
        uri_template: R::URI_TEMPLATE.to_string(),
        name: R::NAME.to_string(),
        title: Some(R::NAME.to_string()),
        description: Some(R::DESCRIPTION.to_string()),
        mime_type: Some(R::MIME_TYPE.to_string()),
    }
    .no_annotation();

    Ok(TemplateEntry {
        template,
        pattern: UriTemplate::parse(R::URI_TEMPLATE)?,
        reader: R::read,
    })
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Result<Vec<TemplateEntry>, ResourceError> {
    Ok(vec![build_template::<GreetingResource>()?])
}

/// Get the list of all resource URI templates.
pub fn resource_template_uris() -> Vec<&'static str> {
    vec![GreetingResource::URI_TEMPLATE]
}
