use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::llm::StructuredOutput;
use crate::domain::DomainError;

/// Binary hallucination judgment; `Yes` means the answer is hallucinated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HallucinationScore {
    Yes,
    No,
}

/// Structured grader reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallucinationVerdict {
    pub binary_score: HallucinationScore,
    pub explanation: String,
}

impl HallucinationVerdict {
    pub fn grounded(explanation: impl Into<String>) -> Self {
        Self {
            binary_score: HallucinationScore::No,
            explanation: explanation.into(),
        }
    }

    pub fn hallucinated(explanation: impl Into<String>) -> Self {
        Self {
            binary_score: HallucinationScore::Yes,
            explanation: explanation.into(),
        }
    }

    pub fn is_hallucinated(&self) -> bool {
        self.binary_score == HallucinationScore::Yes
    }
}

impl StructuredOutput for HallucinationVerdict {
    fn schema_name() -> &'static str {
        "grade_hallucinations"
    }

    fn json_schema() -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "description": "Binary score for hallucination present in generation answer.",
            "properties": {
                "binary_score": {
                    "type": "string",
                    "enum": ["yes", "no"],
                    "description": "'yes' if the answer contains information not grounded in the facts, otherwise 'no'"
                },
                "explanation": {
                    "type": "string",
                    "description": "Explain the reasoning for the score"
                }
            },
            "required": ["binary_score", "explanation"],
            "additionalProperties": false
        })
    }
}

/// Judges whether a generated answer is grounded in supporting facts
#[async_trait]
pub trait HallucinationGrader: Send + Sync + std::fmt::Debug {
    /// Grade against documents retrieved for the original question
    async fn grade(
        &self,
        question: &str,
        generation: &str,
    ) -> Result<HallucinationVerdict, DomainError>;

    /// Grade against the given facts
    async fn grade_against(
        &self,
        generation: &str,
        facts: &str,
    ) -> Result<HallucinationVerdict, DomainError>;
}
