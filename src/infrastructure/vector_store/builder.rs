use std::sync::Arc;

use tracing::{debug, info};

use super::InMemoryVectorIndex;
use crate::domain::retrieval::IndexEntry;
use crate::domain::{
    Chunk, ChunkingConfig, ChunkingStrategy, Corpus, DomainError, EmbeddingProvider,
    EmbeddingRequest,
};
use crate::infrastructure::chunking::RecursiveChunker;

pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;

/// Chunks a corpus and embeds every chunk into an in-memory index
#[derive(Debug)]
pub struct DocumentStoreBuilder {
    embedder: Arc<dyn EmbeddingProvider>,
    strategy: Arc<dyn ChunkingStrategy>,
    chunking: ChunkingConfig,
    model: String,
    batch_size: usize,
}

impl DocumentStoreBuilder {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        let model = embedder.default_model().to_string();

        Self {
            embedder,
            strategy: Arc::new(RecursiveChunker::new()),
            chunking: ChunkingConfig::default(),
            model,
            batch_size: DEFAULT_EMBEDDING_BATCH_SIZE,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_chunking(mut self, chunking: ChunkingConfig) -> Self {
        self.chunking = chunking;
        self
    }

    pub fn with_strategy(mut self, strategy: Arc<dyn ChunkingStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Split every document into chunks, in corpus order
    pub fn chunk_corpus(&self, corpus: &Corpus) -> Result<Vec<Chunk>, DomainError> {
        self.chunking.validate()?;

        let mut chunks = Vec::new();
        for document in corpus.documents() {
            let document_chunks =
                Chunk::from_document(&document, self.strategy.as_ref(), &self.chunking)?;
            debug!(document = %document.id, chunks = document_chunks.len(), "Chunked document");
            chunks.extend(document_chunks);
        }

        Ok(chunks)
    }

    /// Build the index; any failure aborts the whole build
    pub async fn build(&self, corpus: &Corpus) -> Result<InMemoryVectorIndex, DomainError> {
        if self.batch_size == 0 {
            return Err(DomainError::validation("batch_size must be greater than 0"));
        }

        let chunks = self.chunk_corpus(corpus)?;
        let mut entries = Vec::with_capacity(chunks.len());
        let mut dimensions: Option<usize> = None;

        for batch in chunks.chunks(self.batch_size) {
            let texts: Vec<String> = batch.iter().map(|c| c.content.clone()).collect();
            let response = self
                .embedder
                .embed(EmbeddingRequest::batch(&self.model, texts))
                .await?;

            let vectors = response.into_vectors();
            if vectors.len() != batch.len() {
                return Err(DomainError::provider(
                    self.embedder.provider_name(),
                    format!(
                        "Embedding count mismatch: sent {}, received {}",
                        batch.len(),
                        vectors.len()
                    ),
                ));
            }

            for (vector, chunk) in vectors.into_iter().zip(batch) {
                let expected = *dimensions.get_or_insert(vector.len());
                if vector.len() != expected {
                    return Err(DomainError::provider(
                        self.embedder.provider_name(),
                        format!(
                            "Inconsistent embedding dimensions: {} and {}",
                            expected,
                            vector.len()
                        ),
                    ));
                }
                entries.push(IndexEntry::new(vector, chunk.clone()));
            }
        }

        info!(
            documents = corpus.len(),
            chunks = entries.len(),
            model = %self.model,
            "Document index built"
        );

        Ok(InMemoryVectorIndex::new(
            entries,
            self.embedder.clone(),
            self.model.clone(),
        ))
    }
}
