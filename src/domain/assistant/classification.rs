use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Numeric complexity label produced by the EHR-aware classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionComplexity {
    Simple = 0,
    Complex = 1,
}

impl QuestionComplexity {
    /// Parse the classifier's reply, which must be exactly `0` or `1`
    pub fn parse(reply: &str) -> Result<Self, DomainError> {
        match reply.trim() {
            "0" => Ok(Self::Simple),
            "1" => Ok(Self::Complex),
            other => Err(DomainError::schema_violation(
                "question_complexity",
                format!("Unexpected response: {}", other),
            )),
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}
