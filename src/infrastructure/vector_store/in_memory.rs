use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::embedding::cosine_similarity;
use crate::domain::retrieval::IndexEntry;
use crate::domain::{DomainError, EmbeddingProvider, EmbeddingRequest, RetrievedChunk, Retriever};

/// Brute-force cosine index, read-only once built
#[derive(Debug)]
pub struct InMemoryVectorIndex {
    entries: Vec<IndexEntry>,
    embedder: Arc<dyn EmbeddingProvider>,
    model: String,
}

impl InMemoryVectorIndex {
    pub fn new(
        entries: Vec<IndexEntry>,
        embedder: Arc<dyn EmbeddingProvider>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            entries,
            embedder,
            model: model.into(),
        }
    }

    /// Number of distinct source documents
    pub fn document_count(&self) -> usize {
        let mut ids: Vec<&str> = self
            .entries
            .iter()
            .map(|e| e.chunk.document_id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    async fn embed_query(&self, query: &str) -> Result<Vec<f32>, DomainError> {
        let response = self
            .embedder
            .embed(EmbeddingRequest::single(&self.model, query))
            .await?;

        response
            .first()
            .map(|e| e.vector().to_vec())
            .ok_or_else(|| DomainError::provider(self.embedder.provider_name(), "No query embedding returned"))
    }
}

#[async_trait]
impl Retriever for InMemoryVectorIndex {
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<RetrievedChunk>, DomainError> {
        if self.entries.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let query_vector = self.embed_query(query).await?;

        let expected = self.entries[0].embedding.len();
        if query_vector.len() != expected {
            return Err(DomainError::provider(
                self.embedder.provider_name(),
                format!(
                    "Query embedding has {} dimensions, index has {}",
                    query_vector.len(),
                    expected
                ),
            ));
        }

        let mut scored: Vec<RetrievedChunk> = self
            .entries
            .iter()
            .map(|e| RetrievedChunk::new(e.chunk.clone(), cosine_similarity(&query_vector, &e.embedding)))
            .collect();

        // Stable, so ties keep index order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(k);

        debug!(k = k, returned = scored.len(), "Retrieved chunks");

        Ok(scored)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::corpus::{Chunk, ChunkMetadata};
    use crate::domain::embedding::MockEmbeddingProvider;

    fn chunk(doc: &str, content: &str) -> Chunk {
        Chunk {
            document_id: doc.to_string(),
            source_url: format!("http://x/{}.pdf", doc),
            content: content.to_string(),
            metadata: ChunkMetadata {
                chunk_index: 0,
                total_chunks: 1,
                char_start: 0,
                char_end: content.chars().count(),
            },
        }
    }

    fn index(texts: &[(&str, &str)]) -> InMemoryVectorIndex {
        let embedder = Arc::new(MockEmbeddingProvider::new(64));
        let entries = texts
            .iter()
            .map(|(doc, text)| IndexEntry::new(embedder.vector_for(text), chunk(doc, text)))
            .collect();

        InMemoryVectorIndex::new(entries, embedder, "mistral-embed")
    }

    #[tokio::test]
    async fn test_retrieve_orders_by_similarity() {
        let index = index(&[
            ("diet", "eat small frequent meals during treatment"),
            ("chemo", "breast cancer chemotherapy regimens for stage 3"),
            ("sleep", "fatigue and sleep hygiene"),
        ]);

        let results = index
            .retrieve("stage 3 breast cancer chemotherapy regimens", 2)
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].chunk.document_id, "chemo");
        assert!(results[0].score >= results[1].score);
    }

    #[tokio::test]
    async fn test_retrieve_caps_at_index_size() {
        let index = index(&[("a", "one"), ("b", "two")]);
        let results = index.retrieve("one", 10).await.unwrap();

        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_index_yields_empty() {
        let embedder = Arc::new(MockEmbeddingProvider::new(8));
        let index = InMemoryVectorIndex::new(vec![], embedder.clone(), "mistral-embed");

        assert!(index.retrieve("anything", 4).await.unwrap().is_empty());
        assert!(index.is_empty());
        assert_eq!(embedder.call_count(), 0);
    }

    #[tokio::test]
    async fn test_dimension_mismatch() {
        let embedder = Arc::new(MockEmbeddingProvider::new(8));
        let entries = vec![IndexEntry::new(vec![1.0; 16], chunk("a", "text"))];
        let index = InMemoryVectorIndex::new(entries, embedder, "mistral-embed");

        let result = index.retrieve("text", 4).await;
        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }

    #[tokio::test]
    async fn test_embedding_failure_propagates() {
        let embedder = Arc::new(MockEmbeddingProvider::new(8).with_error("service down"));
        let entries = vec![IndexEntry::new(vec![1.0; 8], chunk("a", "text"))];
        let index = InMemoryVectorIndex::new(entries, embedder, "mistral-embed");

        assert!(index.retrieve("text", 4).await.is_err());
    }

    #[test]
    fn test_document_count() {
        let index = index(&[("a", "one"), ("a", "two"), ("b", "three")]);
        assert_eq!(index.document_count(), 2);
        assert_eq!(index.len(), 3);
    }
}
