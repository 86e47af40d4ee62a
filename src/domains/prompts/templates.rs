//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and its `{{variable}}`
//! rendering.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// Hook that derives extra arguments before rendering.
pub type PrepareArguments = fn(&mut HashMap<String, String>);

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with `{{variable}}` placeholders.
    pub template: String,

    /// Applied to the caller's arguments before substitution.
    pub prepare: PrepareArguments,
}

impl PromptTemplate {
    /// Create a new prompt template with no argument preparation.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
            prepare: |_| {},
        }
    }

    /// Render the template with the given arguments.
    ///
    /// `{{variable}}` is replaced with the value of `variable`; placeholders
    /// with no value are removed.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut arguments = arguments.clone();
        (self.prepare)(&mut arguments);

        let mut result = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find("{{") {
            result.push_str(&rest[..open]);
            let close = rest[open..]
                .find("}}")
                .map(|offset| open + offset)
                .ok_or_else(|| PromptError::template("Unclosed {{ placeholder"))?;

            let key = rest[open + 2..close].trim();
            if let Some(value) = arguments.get(key) {
                result.push_str(value);
            }
            rest = &rest[close + 2..];
        }
        result.push_str(rest);

        Ok(result)
    }
}
