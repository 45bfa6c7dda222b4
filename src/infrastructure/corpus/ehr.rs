use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::DomainError;

/// The patient's electronic health record as one opaque text blob
#[derive(Clone)]
pub struct EhrRecord {
    text: Arc<str>,
}

impl EhrRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::from(text.into()),
        }
    }

    /// Read the whole record once; a missing file is fatal at startup
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();

        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::corpus(format!("Cannot read EHR '{}': {}", path.display(), e))
        })?;

        let ehr = Self::new(text);
        if ehr.is_empty() {
            warn!(path = %path.display(), "EHR is empty; simple questions have no record to draw on");
        } else {
            info!(path = %path.display(), chars = ehr.text.chars().count(), "EHR loaded");
        }

        Ok(ehr)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

// Health data stays out of logs
impl std::fmt::Debug for EhrRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EhrRecord")
            .field("chars", &self.text.chars().count())
            .finish()
    }
}
