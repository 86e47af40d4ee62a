//! Greeting resource definition.

use std::collections::HashMap;

use super::ResourceTemplateDefinition;
use crate::domains::resources::error::ResourceError;

/// Personalized greeting, addressed by `greeting://{name}`.
pub struct GreetingResource;

impl GreetingResource {
    pub fn greet(name: &str) -> String {
        format!("Hello, {}!", name)
    }
}

impl ResourceTemplateDefinition for GreetingResource {
    const URI_TEMPLATE: &'static str = "greeting://{name}";
    const NAME: &'static str = "Greeting Resource";
    const DESCRIPTION: &'static str = "Get a personalized greeting";
    const MIME_TYPE: &'static str = "text/plain";

    fn read(params: &HashMap<String, String>) -> Result<String, ResourceError> {
        let name = params
            .get("name")
            .ok_or_else(|| ResourceError::missing_parameter("name"))?;
        Ok(Self::greet(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_metadata() {
        assert_eq!(GreetingResource::URI_TEMPLATE, "greeting://{name}");
        assert_eq!(GreetingResource::NAME, "Greeting Resource");
    }

    #[test]
    fn test_greeting_read() {
        let params = HashMap::from([("name".to_string(), "Ana".to_string())]);
        assert_eq!(GreetingResource::read(&params).unwrap(), "Hello, Ana!");
    }

    #[test]
    fn test_greeting_missing_name() {
        assert!(GreetingResource::read(&HashMap::new()).is_err());
    }
}
