//! Oncochat
//!
//! A question-answering assistant for cancer patients:
//! - Routes each question to the patient's health record or a document corpus
//! - Answers with a hosted chat model, retrieving corpus chunks when needed
//! - Grades every answer for unsupported claims before returning it

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use domain::{Credential, CredentialProvider, DomainError, EmbeddingProvider, LlmProvider, Retriever};
use infrastructure::assistant::{
    AnswerGenerator, Chatbot, GenerationSettings, LlmHallucinationGrader, LlmQueryRouter,
    QuestionClassifier, QuestionSuggester,
};
use infrastructure::corpus::{load_corpus, EhrRecord};
use infrastructure::embedding::MistralEmbeddingProvider;
use infrastructure::llm::{HttpClient, MistralProvider};
use infrastructure::vector_store::{DocumentStoreBuilder, InMemoryVectorIndex};
use tracing::info;

/// Hosted model clients sharing one credential
#[derive(Debug, Clone)]
pub struct Providers {
    pub llm: Arc<dyn LlmProvider>,
    pub embedding: Arc<dyn EmbeddingProvider>,
}

/// Build the Mistral chat and embedding clients from configuration
pub async fn create_providers(
    config: &AppConfig,
    credentials: &dyn CredentialProvider,
) -> Result<Providers, DomainError> {
    let credential: Credential = credentials.get_credential().await?;
    info!(source = credentials.provider_name(), "Credential resolved");

    let client = match config.llm.timeout_secs {
        Some(secs) => HttpClient::with_timeout(Duration::from_secs(secs))?,
        None => HttpClient::new(),
    };

    Ok(Providers {
        llm: Arc::new(MistralProvider::with_base_url(
            client.clone(),
            &credential,
            &config.llm.base_url,
        )),
        embedding: Arc::new(MistralEmbeddingProvider::with_base_url(
            client,
            &credential,
            &config.llm.base_url,
        )),
    })
}

/// Load the corpus and embed it into a fresh index
pub async fn build_index(
    config: &AppConfig,
    embedding: Arc<dyn EmbeddingProvider>,
) -> Result<InMemoryVectorIndex, DomainError> {
    let corpus = load_corpus(&config.corpus.path).await?;

    DocumentStoreBuilder::new(embedding)
        .with_model(&config.embedding.model)
        .with_chunking(config.corpus.chunking())
        .with_batch_size(config.embedding.batch_size)
        .build(&corpus)
        .await
}

/// Create the application state with all services initialized
///
/// Fails if the credential, corpus or EHR cannot be loaded.
pub async fn create_app_state(
    config: &AppConfig,
    credentials: &dyn CredentialProvider,
) -> Result<AppState, DomainError> {
    let providers = create_providers(config, credentials).await?;
    let ehr = EhrRecord::load(&config.ehr.path).await?;
    let index: Arc<dyn Retriever> = Arc::new(build_index(config, providers.embedding.clone()).await?);

    Ok(assemble_state(config, providers.llm, index, ehr))
}

/// Wire the assistant services around an existing index and record
pub fn assemble_state(
    config: &AppConfig,
    llm: Arc<dyn LlmProvider>,
    index: Arc<dyn Retriever>,
    ehr: EhrRecord,
) -> AppState {
    let settings = GenerationSettings::new(&config.llm.model)
        .with_temperature(config.llm.temperature)
        .with_max_tokens(config.llm.max_tokens);
    let top_k = config.corpus.top_k;

    let chatbot = Chatbot::new(
        Arc::new(LlmQueryRouter::new(llm.clone(), settings.clone())),
        AnswerGenerator::new(llm.clone(), index.clone(), settings.clone()).with_top_k(top_k),
        Arc::new(
            LlmHallucinationGrader::new(llm.clone(), index.clone(), settings.clone())
                .with_top_k(top_k),
        ),
        ehr.clone(),
    )
    .with_grounding(config.assistant.grounding)
    .with_fallback(config.assistant.fallback());

    let classifier =
        QuestionClassifier::new(llm.clone(), ehr).with_model(&config.llm.classifier_model);
    let suggester = QuestionSuggester::new(llm, settings);

    info!(
        model = %config.llm.model,
        chunks = index.len(),
        grounding = ?config.assistant.grounding,
        "Assistant ready"
    );

    AppState::new(chatbot, classifier, suggester, index)
}
