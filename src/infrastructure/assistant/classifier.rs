use std::sync::Arc;

use tracing::debug;

use super::GenerationSettings;
use crate::domain::assistant::prompts::CLASSIFICATION_TEMPLATE;
use crate::domain::{DomainError, LlmProvider, LlmRequest, QuestionComplexity};
use crate::infrastructure::corpus::EhrRecord;

pub const DEFAULT_CLASSIFIER_MODEL: &str = "mistral-small-latest";

/// Reply budget; the model must answer with a single digit
const CLASSIFIER_MAX_TOKENS: u32 = 10;

const CLASSIFIER_TEMPERATURE: f32 = 0.2;

/// Labels a question 0 (simple) or 1 (complex) with the EHR as context
#[derive(Debug)]
pub struct QuestionClassifier {
    provider: Arc<dyn LlmProvider>,
    ehr: EhrRecord,
    settings: GenerationSettings,
}

impl QuestionClassifier {
    pub fn new(provider: Arc<dyn LlmProvider>, ehr: EhrRecord) -> Self {
        Self {
            provider,
            ehr,
            settings: GenerationSettings::new(DEFAULT_CLASSIFIER_MODEL)
                .with_temperature(CLASSIFIER_TEMPERATURE)
                .with_max_tokens(Some(CLASSIFIER_MAX_TOKENS)),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.settings.model = model.into();
        self
    }

    pub async fn classify(&self, question: &str) -> Result<QuestionComplexity, DomainError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::validation("Question must not be empty"));
        }

        let prompt = CLASSIFICATION_TEMPLATE.render(&[("question", question), ("ehr", self.ehr.text())])?;
        let request = self.settings.apply(LlmRequest::builder().user(prompt)).build();

        let response = self.provider.chat(&self.settings.model, request).await?;
        let complexity = QuestionComplexity::parse(response.content())?;

        debug!(complexity = complexity.code(), "Question classified");

        Ok(complexity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;

    #[tokio::test]
    async fn test_classify_complex() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("1"));
        let classifier = QuestionClassifier::new(provider.clone(), EhrRecord::new("Stage II"));

        let complexity = classifier
            .classify("What are the side effects of tamoxifen?")
            .await
            .unwrap();

        assert_eq!(complexity, QuestionComplexity::Complex);

        let (model, request) = provider.requests().remove(0);
        assert_eq!(model, "mistral-small-latest");
        assert_eq!(request.max_tokens, Some(10));
        assert_eq!(request.temperature, Some(0.2));
        assert!(request.prompt_text().contains("EHR context: Stage II"));
    }

    #[tokio::test]
    async fn test_classify_simple_with_custom_model() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response(" 0 "));
        let classifier = QuestionClassifier::new(provider.clone(), EhrRecord::new("record"))
            .with_model("open-mistral-nemo");

        assert_eq!(
            classifier.classify("When is my appointment?").await.unwrap(),
            QuestionComplexity::Simple
        );
        assert_eq!(provider.requests()[0].0, "open-mistral-nemo");
    }

    #[tokio::test]
    async fn test_unexpected_reply() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("complex"));
        let classifier = QuestionClassifier::new(provider, EhrRecord::new("record"));

        let result = classifier.classify("question").await;
        assert!(matches!(result, Err(DomainError::SchemaViolation { .. })));
    }
}
