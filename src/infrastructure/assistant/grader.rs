use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::GenerationSettings;
use crate::domain::assistant::prompts::{GRADER_SYSTEM_PROMPT, GRADER_TEMPLATE};
use crate::domain::llm::structured_chat;
use crate::domain::retrieval::{format_context, DEFAULT_TOP_K};
use crate::domain::{
    DomainError, HallucinationGrader, HallucinationVerdict, LlmProvider, LlmRequest, Retriever,
};

/// Grader asking the LLM for a structured grounding verdict
#[derive(Debug)]
pub struct LlmHallucinationGrader {
    provider: Arc<dyn LlmProvider>,
    retriever: Arc<dyn Retriever>,
    settings: GenerationSettings,
    top_k: usize,
}

impl LlmHallucinationGrader {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        retriever: Arc<dyn Retriever>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            provider,
            retriever,
            settings,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

#[async_trait]
impl HallucinationGrader for LlmHallucinationGrader {
    async fn grade(
        &self,
        question: &str,
        generation: &str,
    ) -> Result<HallucinationVerdict, DomainError> {
        let documents = self.retriever.retrieve(question, self.top_k).await?;
        debug!(chunks = documents.len(), "Retrieved facts for grading");

        self.grade_against(generation, &format_context(&documents))
            .await
    }

    async fn grade_against(
        &self,
        generation: &str,
        facts: &str,
    ) -> Result<HallucinationVerdict, DomainError> {
        let prompt = GRADER_TEMPLATE.render(&[("documents", facts), ("generation", generation)])?;

        let request = self
            .settings
            .apply(LlmRequest::builder().system(GRADER_SYSTEM_PROMPT).user(prompt))
            .build();

        let verdict: HallucinationVerdict =
            structured_chat(self.provider.as_ref(), &self.settings.model, request).await?;

        debug!(hallucinated = verdict.is_hallucinated(), "Answer graded");

        Ok(verdict)
    }
}
