use std::fmt;

/// API key and project identifier for the hosted LLM and embedding services
///
/// `Debug` never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    api_key: String,
    project_id: Option<String>,
}

impl Credential {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: None,
        }
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &"[REDACTED]")
            .field("project_id", &self.project_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_creation() {
        let cred = Credential::new("test-key").with_project_id("oncology-pilot");

        assert_eq!(cred.api_key(), "test-key");
        assert_eq!(cred.project_id(), Some("oncology-pilot"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let cred = Credential::new("super-secret");
        let printed = format!("{:?}", cred);

        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
