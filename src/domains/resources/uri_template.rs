//! Minimal URI template matching.
//!
//! Supports the simple `{var}` expansions of RFC 6570 level 1, which is all
//! resource templates need: `greeting://{name}` matches `greeting://Ana` and
//! binds `name = "Ana"`. A variable matches one or more characters other
//! than `/`.

use std::collections::HashMap;

use super::error::ResourceError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Variable(String),
}

/// A parsed URI template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriTemplate {
    raw: String,
    parts: Vec<Part>,
}

impl UriTemplate {
    /// Parse a template such as `greeting://{name}`.
    pub fn parse(template: &str) -> Result<Self, ResourceError> {
        let mut parts = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                parts.push(Part::Literal(rest[..open].to_string()));
            }
            let close = rest[open..]
                .find('}')
                .map(|offset| open + offset)
                .ok_or_else(|| ResourceError::invalid_template(template, "unclosed '{'"))?;

            let name = rest[open + 1..close].trim();
            if name.is_empty() {
                return Err(ResourceError::invalid_template(template, "empty variable"));
            }
            if matches!(parts.last(), Some(Part::Variable(_))) {
                return Err(ResourceError::invalid_template(
                    template,
                    "adjacent variables are ambiguous",
                ));
            }
            parts.push(Part::Variable(name.to_string()));
            rest = &rest[close + 1..];
        }
        if !rest.is_empty() {
            parts.push(Part::Literal(rest.to_string()));
        }

        Ok(Self {
            raw: template.to_string(),
            parts,
        })
    }

    /// The template string as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the template variables, in order.
    #[cfg(test)]
    fn variables(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(|part| match part {
            Part::Variable(name) => Some(name.as_str()),
            Part::Literal(_) => None,
        })
    }

    /// Match `uri` against the template, returning the bound variables.
    pub fn matches(&self, uri: &str) -> Option<HashMap<String, String>> {
        let mut bindings = HashMap::new();
        let mut rest = uri;

        for (index, part) in self.parts.iter().enumerate() {
            match part {
                Part::Literal(literal) => rest = rest.strip_prefix(literal.as_str())?,
                Part::Variable(name) => {
                    let end = match self.parts.get(index + 1) {
                        Some(Part::Literal(next)) => rest.find(next.as_str())?,
                        _ => rest.len(),
                    };
                    let value = &rest[..end];
                    if value.is_empty() || value.contains('/') {
                        return None;
                    }
                    bindings.insert(name.clone(), value.to_string());
                    rest = &rest[end..];
                }
            }
        }

        rest.is_empty().then_some(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_variable() {
        let template = UriTemplate::parse("greeting://{name}").unwrap();
        let bindings = template.matches("greeting://Ana").unwrap();
        assert_eq!(bindings.get("name").map(String::as_str), Some("Ana"));
        assert_eq!(template.variables().collect::<Vec<_>>(), vec!["name"]);
    }

    #[test]
    fn test_no_match() {
        let template = UriTemplate::parse("greeting://{name}").unwrap();
        assert!(template.matches("greeting://").is_none());
        assert!(template.matches("farewell://Ana").is_none());
        assert!(template.matches("greeting://a/b").is_none());
    }

    #[test]
    fn test_multiple_variables_with_literals() {
        let template = UriTemplate::parse("config://{section}/{key}.json").unwrap();
        let bindings = template.matches("config://server/port.json").unwrap();
        assert_eq!(bindings["section"], "server");
        assert_eq!(bindings["key"], "port");
        assert!(template.matches("config://server/port.toml").is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(UriTemplate::parse("greeting://{name").is_err());
        assert!(UriTemplate::parse("greeting://{}").is_err());
        assert!(UriTemplate::parse("x://{a}{b}").is_err());
    }

    #[test]
    fn test_literal_only() {
        let template = UriTemplate::parse("mcp://server/info").unwrap();
        assert!(template.matches("mcp://server/info").unwrap().is_empty());
        assert!(template.matches("mcp://server/info2").is_none());
    }
}
