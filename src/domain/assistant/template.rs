//! Prompt template rendering
//!
//! Variable syntax: `${var:name}` or `${var:name:default}`. Rendering is a
//! single pass, so substituted text (an EHR, a retrieved chunk) is never
//! scanned for further placeholders.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::domain::DomainError;

static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{var:([a-zA-Z0-9][-_a-zA-Z0-9]*)(?::([^}]*))?\}")
        .expect("variable pattern is a valid regex")
});

/// A prompt with named placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    content: String,
}

impl PromptTemplate {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Names of all placeholders, in order of first appearance
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();

        for cap in VARIABLE_PATTERN.captures_iter(&self.content) {
            if let Some(name) = cap.get(1).map(|m| m.as_str()) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        names
    }

    /// Render with the given values; a placeholder with neither a value nor
    /// a default is an error
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, DomainError> {
        let mut missing: Option<String> = None;

        let rendered = VARIABLE_PATTERN.replace_all(&self.content, |caps: &Captures| {
            let name = &caps[1];
            let value = values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, v)| *v)
                .or_else(|| caps.get(2).map(|m| m.as_str()));

            match value {
                Some(v) => v.to_string(),
                None => {
                    missing.get_or_insert_with(|| name.to_string());
                    String::new()
                }
            }
        });
        let rendered = rendered.into_owned();

        match missing {
            Some(name) => Err(DomainError::template(format!(
                "Missing required variable: {}",
                name
            ))),
            None => Ok(rendered),
        }
    }
}
