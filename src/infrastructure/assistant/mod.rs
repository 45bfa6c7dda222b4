//! LLM-backed assistant pipeline: routing, answering and grading

mod chatbot;
mod classifier;
mod generator;
mod grader;
mod router;
mod suggester;

pub use chatbot::Chatbot;
pub use classifier::{QuestionClassifier, DEFAULT_CLASSIFIER_MODEL};
pub use generator::AnswerGenerator;
pub use grader::LlmHallucinationGrader;
pub use router::LlmQueryRouter;
pub use suggester::QuestionSuggester;

use crate::domain::llm::LlmRequestBuilder;

pub const DEFAULT_CHAT_MODEL: &str = "mistral-large-latest";

/// Model parameters shared by every call a component makes
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl GenerationSettings {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.0,
            max_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn apply(&self, builder: LlmRequestBuilder) -> LlmRequestBuilder {
        builder
            .temperature(self.temperature)
            .max_tokens_opt(self.max_tokens)
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::new(DEFAULT_CHAT_MODEL)
    }
}
