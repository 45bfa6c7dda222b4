use std::sync::Arc;

use tracing::debug;

use super::GenerationSettings;
use crate::domain::assistant::prompts::SUGGESTION_TEMPLATE;
use crate::domain::{DomainError, LlmProvider, LlmRequest, SuggestedQuestions};

/// Proposes follow-up questions from a conversation
#[derive(Debug)]
pub struct QuestionSuggester {
    provider: Arc<dyn LlmProvider>,
    settings: GenerationSettings,
}

impl QuestionSuggester {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self { provider, settings }
    }

    /// `conversation` holds the turns in order; `context` is optional
    /// background such as retrieved documents
    pub async fn suggest(
        &self,
        conversation: &[String],
        context: Option<&str>,
    ) -> Result<SuggestedQuestions, DomainError> {
        if conversation.iter().all(|turn| turn.trim().is_empty()) {
            return Err(DomainError::validation("Conversation must not be empty"));
        }

        let history = conversation.join("\n");
        let prompt = SUGGESTION_TEMPLATE.render(&[
            ("conversation", history.as_str()),
            ("context", context.unwrap_or_default()),
        ])?;

        let request = self.settings.apply(LlmRequest::builder().user(prompt)).build();
        let response = self.provider.chat(&self.settings.model, request).await?;

        let suggestions = SuggestedQuestions::parse(response.content());
        debug!(count = suggestions.len(), "Suggested questions");

        Ok(suggestions)
    }
}
