use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::corpus::Chunk;
use crate::domain::DomainError;

/// Number of chunks returned when the caller does not say otherwise
pub const DEFAULT_TOP_K: usize = 4;

/// An embedded chunk held by an index
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub embedding: Vec<f32>,
    pub chunk: Chunk,
}

impl IndexEntry {
    pub fn new(embedding: Vec<f32>, chunk: Chunk) -> Self {
        Self { embedding, chunk }
    }
}

/// A chunk returned by a query, with its similarity to the query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub chunk: Chunk,
    pub score: f32,
}

impl RetrievedChunk {
    pub fn new(chunk: Chunk, score: f32) -> Self {
        Self { chunk, score }
    }

    pub fn content(&self) -> &str {
        &self.chunk.content
    }
}

/// Top-k similarity search over the document index
#[async_trait]
pub trait Retriever: Send + Sync + Debug {
    /// Return at most `k` chunks ordered by descending similarity
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<RetrievedChunk>, DomainError>;

    /// Number of chunks held by the index
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Join retrieved chunk texts with blank lines for prompt context
pub fn format_context(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .map(|c| c.content())
        .collect::<Vec<_>>()
        .join("\n\n")
}
