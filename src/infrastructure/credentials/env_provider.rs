use async_trait::async_trait;
use std::env;

use crate::domain::{Credential, CredentialProvider, DomainError};

pub const DEFAULT_API_KEY_VAR: &str = "MISTRAL_API_KEY";
pub const DEFAULT_PROJECT_ID_VAR: &str = "MISTRAL_PROJECT_ID";

/// Credential provider that reads from environment variables
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    api_key_var: String,
    project_id_var: String,
}

impl EnvCredentialProvider {
    pub fn new(api_key_var: impl Into<String>, project_id_var: impl Into<String>) -> Self {
        Self {
            api_key_var: api_key_var.into(),
            project_id_var: project_id_var.into(),
        }
    }

    fn read_credential(&self) -> Result<Credential, DomainError> {
        let api_key = env::var(&self.api_key_var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                DomainError::credential(format!(
                    "Environment variable '{}' not set",
                    self.api_key_var
                ))
            })?;

        let mut credential = Credential::new(api_key);

        if let Ok(project_id) = env::var(&self.project_id_var) {
            if !project_id.trim().is_empty() {
                credential = credential.with_project_id(project_id);
            }
        }

        Ok(credential)
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_VAR, DEFAULT_PROJECT_ID_VAR)
    }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
    async fn get_credential(&self) -> Result<Credential, DomainError> {
        self.read_credential()
    }

    fn provider_name(&self) -> &'static str {
        "environment"
    }
}
