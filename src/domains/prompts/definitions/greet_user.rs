//! Greeting prompt definition.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::PromptDefinition;

/// Tone requested for the greeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GreetingStyle {
    #[default]
    Friendly,
    Formal,
    Casual,
}

impl GreetingStyle {
    /// Look up a style by name; anything unrecognized is friendly.
    pub fn from_name(name: &str) -> Self {
        match name {
            "formal" => Self::Formal,
            "casual" => Self::Casual,
            _ => Self::Friendly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Casual => "casual",
        }
    }

    /// The writing instruction the prompt opens with.
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Friendly => "Please write a warm, friendly greeting",
            Self::Formal => "Please write a formal, professional greeting",
            Self::Casual => "Please write a casual, relaxed greeting",
        }
    }
}

/// Asks the model to greet someone in a given style.
pub struct GreetUserPrompt;

impl PromptDefinition for GreetUserPrompt {
    const NAME: &'static str = "greet_user";
    const DESCRIPTION: &'static str = "Generate a greeting prompt";

    fn template() -> &'static str {
        "{{instruction}} for someone named {{name}}."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "name".to_string(),
                title: None,
                description: Some("The name of the person to greet".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "style".to_string(),
                title: None,
                description: Some("The style of the greeting".to_string()),
                required: Some(false),
            },
        ]
    }

    fn prepare(arguments: &mut HashMap<String, String>) {
        let style = arguments
            .get("style")
            .map(|s| GreetingStyle::from_name(s))
            .unwrap_or_default();

        arguments.insert("style".to_string(), style.as_str().to_string());
        arguments.insert("instruction".to_string(), style.instruction().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_user_metadata() {
        assert_eq!(GreetUserPrompt::NAME, "greet_user");
        assert!(!GreetUserPrompt::template().is_empty());

        let args = GreetUserPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "name");
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].required, Some(false));
    }

    #[test]
    fn test_style_lookup() {
        assert_eq!(GreetingStyle::from_name("formal"), GreetingStyle::Formal);
        assert_eq!(GreetingStyle::from_name("casual"), GreetingStyle::Casual);
        assert_eq!(GreetingStyle::from_name("friendly"), GreetingStyle::Friendly);
        assert_eq!(GreetingStyle::from_name("grumpy"), GreetingStyle::Friendly);
    }

    #[test]
    fn test_prepare_defaults_to_friendly() {
        let mut args = HashMap::from([("name".to_string(), "Ana".to_string())]);
        GreetUserPrompt::prepare(&mut args);
        assert_eq!(args["style"], "friendly");
        assert_eq!(args["instruction"], "Please write a warm, friendly greeting");
    }
}
