//! Embedding provider trait definition

use async_trait::async_trait;
use std::fmt::Debug;

use super::{EmbeddingRequest, EmbeddingResponse};
use crate::domain::DomainError;

/// Trait for hosted text-embedding services
#[async_trait]
pub trait EmbeddingProvider: Send + Sync + Debug {
    /// Generate embeddings for the given input
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError>;

    fn provider_name(&self) -> &'static str;

    fn default_model(&self) -> &'static str;

    /// Embedding dimensions for a known model
    fn dimensions(&self, model: &str) -> Option<usize>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::domain::embedding::{Embedding, EmbeddingUsage};

    /// Hashes lowercase words into buckets so texts sharing words are similar
    #[derive(Debug)]
    pub struct MockEmbeddingProvider {
        dimensions: usize,
        error: Option<String>,
        calls: AtomicUsize,
    }

    impl MockEmbeddingProvider {
        pub fn new(dimensions: usize) -> Self {
            Self {
                dimensions,
                error: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn vector_for(&self, text: &str) -> Vec<f32> {
            let mut vector = vec![0.0; self.dimensions];

            for word in text
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
            {
                let hash = word
                    .to_lowercase()
                    .bytes()
                    .fold(7u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
                vector[(hash % self.dimensions as u64) as usize] += 1.0;
            }

            vector
        }
    }

    #[async_trait]
    impl EmbeddingProvider for MockEmbeddingProvider {
        async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(ref error) = self.error {
                return Err(DomainError::provider("mock", error));
            }

            let inputs = request.inputs();
            let embeddings: Vec<Embedding> = inputs
                .iter()
                .enumerate()
                .map(|(idx, text)| Embedding::new(idx, self.vector_for(text)))
                .collect();

            let total_tokens = inputs.iter().map(|t| t.len() / 4).sum::<usize>() as u32;

            Ok(EmbeddingResponse::new(
                request.model().to_string(),
                embeddings,
                EmbeddingUsage::new(total_tokens, total_tokens),
            ))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }

        fn default_model(&self) -> &'static str {
            "mock-embed"
        }

        fn dimensions(&self, _model: &str) -> Option<usize> {
            Some(self.dimensions)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::embedding::cosine_similarity;

        #[tokio::test]
        async fn test_batch_dimensions() {
            let provider = MockEmbeddingProvider::new(64);
            let request = EmbeddingRequest::batch("mock-embed", vec!["Hello".into(), "World".into()]);

            let response = provider.embed(request).await.unwrap();

            assert_eq!(response.embeddings().len(), 2);
            assert_eq!(response.embeddings()[1].dimensions(), 64);
        }

        #[test]
        fn test_shared_words_are_similar() {
            let provider = MockEmbeddingProvider::new(256);
            let a = provider.vector_for("breast cancer chemotherapy");
            let b = provider.vector_for("chemotherapy for breast cancer");
            let c = provider.vector_for("basketball player");

            assert!(cosine_similarity(&a, &b) > cosine_similarity(&a, &c));
        }

        #[tokio::test]
        async fn test_error() {
            let provider = MockEmbeddingProvider::new(8).with_error("API error");
            let request = EmbeddingRequest::single("mock-embed", "Hello");

            assert!(provider.embed(request).await.is_err());
            assert_eq!(provider.call_count(), 1);
        }
    }
}
