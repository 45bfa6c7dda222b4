use serde::{Deserialize, Serialize};

use crate::domain::{ChatOutcome, QuestionComplexity, RouteDecision, SuggestedQuestions};

#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub route: RouteDecision,
    pub hallucinated: bool,
    /// The grader's reasoning
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl From<ChatOutcome> for AskResponse {
    fn from(outcome: ChatOutcome) -> Self {
        let hallucinated = outcome.is_hallucinated();

        Self {
            answer: outcome.answer,
            route: outcome.route,
            hallucinated,
            explanation: outcome.verdict.explanation,
            sources: outcome.sources,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestRequest {
    /// Conversation turns, oldest first
    pub conversation: Vec<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub questions: Vec<String>,
}

impl From<SuggestedQuestions> for SuggestionsResponse {
    fn from(suggestions: SuggestedQuestions) -> Self {
        Self {
            questions: suggestions.questions,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// 0 for simple, 1 for complex
    pub complexity: u8,
    pub label: QuestionComplexity,
}

impl From<QuestionComplexity> for ClassifyResponse {
    fn from(complexity: QuestionComplexity) -> Self {
        Self {
            complexity: complexity.code(),
            label: complexity,
        }
    }
}
