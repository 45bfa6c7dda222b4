//! Application state for shared services

use std::sync::Arc;

use crate::domain::Retriever;
use crate::infrastructure::assistant::{Chatbot, QuestionClassifier, QuestionSuggester};

/// Shared, read-only services; cloned into every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub chatbot: Arc<Chatbot>,
    pub classifier: Arc<QuestionClassifier>,
    pub suggester: Arc<QuestionSuggester>,
    pub retriever: Arc<dyn Retriever>,
}

impl AppState {
    pub fn new(
        chatbot: Chatbot,
        classifier: QuestionClassifier,
        suggester: QuestionSuggester,
        retriever: Arc<dyn Retriever>,
    ) -> Self {
        Self {
            chatbot: Arc::new(chatbot),
            classifier: Arc::new(classifier),
            suggester: Arc::new(suggester),
            retriever,
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use std::sync::Arc;

    use super::AppState;
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::retrieval::MockRetriever;
    use crate::infrastructure::assistant::{
        AnswerGenerator, Chatbot, GenerationSettings, LlmHallucinationGrader, LlmQueryRouter,
        QuestionClassifier, QuestionSuggester,
    };
    use crate::infrastructure::corpus::EhrRecord;

    /// State whose services share one scripted provider
    pub fn state_with(provider: Arc<MockLlmProvider>) -> AppState {
        let retriever = Arc::new(MockRetriever::new().with_chunk("doc1", "short text", 0.5));
        let ehr = EhrRecord::new("Diagnosis: breast cancer, stage III.");
        let settings = GenerationSettings::default();

        let chatbot = Chatbot::new(
            Arc::new(LlmQueryRouter::new(provider.clone(), settings.clone())),
            AnswerGenerator::new(provider.clone(), retriever.clone(), settings.clone()),
            Arc::new(LlmHallucinationGrader::new(provider.clone(), retriever.clone(), settings.clone())),
            ehr.clone(),
        );

        AppState::new(
            chatbot,
            QuestionClassifier::new(provider.clone(), ehr),
            QuestionSuggester::new(provider, settings),
            retriever,
        )
    }
}
