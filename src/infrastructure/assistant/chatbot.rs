use std::sync::Arc;

use tracing::field::Empty;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::AnswerGenerator;
use crate::domain::assistant::{AnswerContext, PipelineStage};
use crate::domain::retrieval::RetrievedChunk;
use crate::domain::{
    ChatOutcome, DomainError, FallbackPolicy, Generation, GroundingPolicy, HallucinationGrader,
    HallucinationVerdict, QueryRouter, RouteDecision,
};
use crate::infrastructure::corpus::EhrRecord;

/// Route, answer and grade one question at a time
///
/// Every run walks ROUTE -> GENERATE -> GRADE -> DONE exactly once. Failures
/// at any stage propagate; nothing is retried.
#[derive(Debug)]
pub struct Chatbot {
    router: Arc<dyn QueryRouter>,
    generator: AnswerGenerator,
    grader: Arc<dyn HallucinationGrader>,
    ehr: EhrRecord,
    grounding: GroundingPolicy,
    fallback: FallbackPolicy,
}

impl Chatbot {
    pub fn new(
        router: Arc<dyn QueryRouter>,
        generator: AnswerGenerator,
        grader: Arc<dyn HallucinationGrader>,
        ehr: EhrRecord,
    ) -> Self {
        Self {
            router,
            generator,
            grader,
            ehr,
            grounding: GroundingPolicy::default(),
            fallback: FallbackPolicy::default(),
        }
    }

    pub fn with_grounding(mut self, grounding: GroundingPolicy) -> Self {
        self.grounding = grounding;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn ehr(&self) -> &EhrRecord {
        &self.ehr
    }

    /// Answer one isolated question
    #[instrument(
        skip(self, question),
        fields(request_id = %Uuid::new_v4(), route = Empty, hallucinated = Empty)
    )]
    pub async fn run_once(&self, question: &str) -> Result<ChatOutcome, DomainError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::validation("Question must not be empty"));
        }

        debug!(stage = %PipelineStage::Route, "Pipeline stage");
        let route = self.router.route(question).await?;
        tracing::Span::current().record("route", route.as_str());

        debug!(stage = %PipelineStage::Generate, route = %route, "Pipeline stage");
        let (generation, context) = self.generate(route, question).await?;

        debug!(stage = %PipelineStage::Grade, "Pipeline stage");
        let verdict = self.grade(question, &generation, &context).await?;
        tracing::Span::current().record("hallucinated", verdict.is_hallucinated());

        let sources = match &context {
            AnswerContext::Ehr => Vec::new(),
            AnswerContext::Documents(chunks) => source_urls(chunks),
        };

        let outcome = ChatOutcome::select(route, generation, verdict, &self.fallback, sources);

        info!(
            stage = %PipelineStage::Done,
            route = %outcome.route,
            hallucinated = outcome.is_hallucinated(),
            "Question answered"
        );

        Ok(outcome)
    }

    async fn generate(
        &self,
        route: RouteDecision,
        question: &str,
    ) -> Result<(Generation, AnswerContext), DomainError> {
        match route {
            RouteDecision::Simple => {
                let generation = self.generator.answer_simple(question, self.ehr.text()).await?;
                Ok((generation, AnswerContext::Ehr))
            }
            RouteDecision::Complex => {
                let (generation, chunks) = self.generator.answer_complex(question).await?;
                Ok((generation, AnswerContext::Documents(chunks)))
            }
        }
    }

    async fn grade(
        &self,
        question: &str,
        generation: &Generation,
        context: &AnswerContext,
    ) -> Result<HallucinationVerdict, DomainError> {
        match (self.grounding, context) {
            (GroundingPolicy::AnswerContext, AnswerContext::Ehr) => {
                self.grader
                    .grade_against(&generation.content, self.ehr.text())
                    .await
            }
            _ => self.grader.grade(question, &generation.content).await,
        }
    }
}

/// Distinct source urls in retrieval order
fn source_urls(chunks: &[RetrievedChunk]) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for chunk in chunks {
        if !urls.contains(&chunk.chunk.source_url) {
            urls.push(chunk.chunk.source_url.clone());
        }
    }
    urls
}
