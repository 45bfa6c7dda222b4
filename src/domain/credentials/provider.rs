use async_trait::async_trait;
use std::fmt::Debug;

use super::Credential;
use crate::domain::DomainError;

/// Source of service credentials (environment, secret store)
#[async_trait]
pub trait CredentialProvider: Send + Sync + Debug {
    async fn get_credential(&self) -> Result<Credential, DomainError>;

    fn provider_name(&self) -> &'static str;
}
