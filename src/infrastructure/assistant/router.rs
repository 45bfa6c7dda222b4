use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::GenerationSettings;
use crate::domain::assistant::prompts::ROUTER_SYSTEM_PROMPT;
use crate::domain::assistant::RouteQuery;
use crate::domain::llm::structured_chat;
use crate::domain::{DomainError, LlmProvider, LlmRequest, QueryRouter, RouteDecision};

/// Router asking the LLM for a constrained `RouteQuery`
#[derive(Debug)]
pub struct LlmQueryRouter {
    provider: Arc<dyn LlmProvider>,
    settings: GenerationSettings,
}

impl LlmQueryRouter {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }
}

#[async_trait]
impl QueryRouter for LlmQueryRouter {
    async fn route(&self, question: &str) -> Result<RouteDecision, DomainError> {
        let request = self
            .settings
            .apply(LlmRequest::builder().system(ROUTER_SYSTEM_PROMPT).user(question))
            .build();

        let reply: RouteQuery =
            structured_chat(self.provider.as_ref(), &self.settings.model, request).await?;

        debug!(route = %reply.datasource, "Question routed");

        Ok(reply.datasource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::{LlmResponseFormat, MockLlmProvider};
    use crate::domain::MessageRole;

    #[tokio::test]
    async fn test_complex_medical_question_routes_complex() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response(r#"{"datasource": "complex"}"#));
        let router = LlmQueryRouter::new(provider.clone(), GenerationSettings::default());

        let route = router
            .route("What are NCCN guidelines for stage 3 breast cancer chemotherapy regimens?")
            .await
            .unwrap();

        assert_eq!(route, RouteDecision::Complex);
    }

    #[tokio::test]
    async fn test_general_question_routes_simple() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response(r#"{"datasource": "simple"}"#));
        let router = LlmQueryRouter::new(provider.clone(), GenerationSettings::default());

        let route = router.route("Who is Michael E. Jordan?").await.unwrap();
        assert_eq!(route, RouteDecision::Simple);

        let (model, request) = provider.requests().remove(0);
        assert_eq!(model, "mistral-large-latest");
        assert_eq!(request.temperature, Some(0.0));
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert_eq!(request.messages[1].content, "Who is Michael E. Jordan?");
        assert!(matches!(
            request.response_format,
            Some(LlmResponseFormat::JsonSchema { .. })
        ));
    }

    #[tokio::test]
    async fn test_out_of_enum_reply_is_schema_violation() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response(r#"{"datasource": "web_search"}"#));
        let router = LlmQueryRouter::new(provider, GenerationSettings::default());

        let result = router.route("anything").await;
        assert!(matches!(result, Err(DomainError::SchemaViolation { .. })));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_error("HTTP 503"));
        let router = LlmQueryRouter::new(provider, GenerationSettings::default());

        assert!(matches!(
            router.route("anything").await,
            Err(DomainError::Provider { .. })
        ));
    }
}
