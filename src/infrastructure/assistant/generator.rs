use std::sync::Arc;

use tracing::debug;

use super::GenerationSettings;
use crate::domain::assistant::prompts::{RAG_ANSWER_TEMPLATE, SIMPLE_ANSWER_TEMPLATE};
use crate::domain::retrieval::{format_context, DEFAULT_TOP_K};
use crate::domain::{DomainError, Generation, LlmProvider, LlmRequest, RetrievedChunk, Retriever};

/// Produces answers on either path; holds no conversation state
#[derive(Debug)]
pub struct AnswerGenerator {
    provider: Arc<dyn LlmProvider>,
    retriever: Arc<dyn Retriever>,
    settings: GenerationSettings,
    top_k: usize,
}

impl AnswerGenerator {
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

    /// Answer from the patient's health record
    pub async fn answer_simple(&self, question: &str, ehr: &str) -> Result<Generation, DomainError> {
        let prompt = SIMPLE_ANSWER_TEMPLATE.render(&[("ehr", ehr), ("question", question)])?;
        self.generate(prompt).await
    }

    /// Answer from chunks retrieved for the question
    pub async fn answer_complex(
        &self,
        question: &str,
    ) -> Result<(Generation, Vec<RetrievedChunk>), DomainError> {
        let chunks = self.retriever.retrieve(question, self.top_k).await?;
        debug!(chunks = chunks.len(), "Retrieved context for answer");

        let context = format_context(&chunks);
        let prompt = RAG_ANSWER_TEMPLATE.render(&[("question", question), ("context", context.as_str())])?;

        let generation = self.generate(prompt).await?;
        Ok((generation, chunks))
    }

    async fn generate(&self, prompt: String) -> Result<Generation, DomainError> {
        // Prompts carry health data; only their size is logged
        debug!(prompt_chars = prompt.chars().count(), "Generating answer");

        let request = self.settings.apply(LlmRequest::builder().user(prompt)).build();
        let response = self.provider.chat(&self.settings.model, request).await?;

        Ok(Generation::new(response.content()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::retrieval::MockRetriever;

    #[tokio::test]
    async fn test_answer_simple_embeds_ehr_and_question() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("Your oncologist is Dr. Lee."));
        let retriever = Arc::new(MockRetriever::new());
        let generator = AnswerGenerator::new(provider.clone(), retriever.clone(), GenerationSettings::default());

        let generation = generator
            .answer_simple("Who is my oncologist?", "Oncologist: Dr. Lee")
            .await
            .unwrap();

        assert_eq!(generation.content, "Your oncologist is Dr. Lee.");
        let prompt = provider.requests()[0].1.prompt_text();
        assert!(prompt.contains("Oncologist: Dr. Lee"));
        assert!(prompt.contains("Who is my oncologist?"));
        assert!(retriever.queries().is_empty());
    }

    #[tokio::test]
    async fn test_answer_complex_uses_retrieved_chunks() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("AC-T is a common regimen."));
        let retriever = Arc::new(
            MockRetriever::new()
                .with_chunk("nccn", "Dose-dense AC followed by paclitaxel", 0.9)
                .with_chunk("asco", "Trastuzumab for HER2-positive disease", 0.7)
                .with_chunk("other", "Unrelated", 0.1),
        );
        let generator = AnswerGenerator::new(provider.clone(), retriever.clone(), GenerationSettings::default())
            .with_top_k(2);

        let (generation, chunks) = generator
            .answer_complex("Which chemotherapy regimens are used?")
            .await
            .unwrap();

        assert_eq!(generation.content, "AC-T is a common regimen.");
        assert_eq!(chunks.len(), 2);
        assert_eq!(retriever.queries(), vec!["Which chemotherapy regimens are used?"]);

        let prompt = provider.requests()[0].1.prompt_text();
        assert!(prompt.contains("Dose-dense AC followed by paclitaxel\n\nTrastuzumab"));
        assert!(!prompt.contains("Unrelated"));
    }

    #[tokio::test]
    async fn test_placeholder_text_in_question_is_not_expanded() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("ok"));
        let generator = AnswerGenerator::new(provider.clone(), Arc::new(MockRetriever::new()), GenerationSettings::default());

        generator.answer_simple("What is ${var:ehr}?", "record").await.unwrap();

        let prompt = provider.requests()[0].1.prompt_text();
        assert!(prompt.contains("What is ${var:ehr}?"));
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_debug_logs_leave_out_health_record() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let provider = Arc::new(MockLlmProvider::new("mock").with_response("Stage III."));
        let generator = AnswerGenerator::new(provider, Arc::new(MockRetriever::new()), GenerationSettings::default());
        generator
            .answer_simple("What stage is my cancer?", "Diagnosis: invasive ductal carcinoma")
            .await
            .unwrap();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Generating answer"));
        assert!(output.contains("prompt_chars"));
        assert!(!output.contains("invasive ductal carcinoma"));
    }
}
