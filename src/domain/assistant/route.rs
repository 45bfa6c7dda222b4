use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::llm::StructuredOutput;
use crate::domain::DomainError;

/// Answer path chosen for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteDecision {
    /// Answer from the patient's health record
    Simple,
    /// Answer from documents retrieved from the corpus
    Complex,
}

impl RouteDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
        }
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured router reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub datasource: RouteDecision,
}

impl StructuredOutput for RouteQuery {
    fn schema_name() -> &'static str {
        "route_query"
    }

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "description": "Route a user query to the most relevant datasource.",
            "properties": {
                "datasource": {
                    "type": "string",
                    "enum": ["simple", "complex"],
                    "description": "\"simple\" concatenates the EHR text with the prompt; \"complex\" retrieves documents and adds them to the prompt."
                }
            },
            "required": ["datasource"],
            "additionalProperties": false
        })
    }
}

/// Classifies a question onto an answer path
#[async_trait]
pub trait QueryRouter: Send + Sync + std::fmt::Debug {
    async fn route(&self, question: &str) -> Result<RouteDecision, DomainError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_route() {
        let query = RouteQuery::decode(r#"{"datasource": "complex"}"#).unwrap();
        assert_eq!(query.datasource, RouteDecision::Complex);
    }

    #[test]
    fn test_decode_route_outside_enum() {
        let result = RouteQuery::decode(r#"{"datasource": "vectorstore"}"#);
        assert!(matches!(result, Err(DomainError::SchemaViolation { .. })));
    }

    #[test]
    fn test_route_display() {
        assert_eq!(RouteDecision::Simple.to_string(), "simple");
    }
}
