//! Chunking strategy trait and chunk types

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::Document;
use crate::domain::DomainError;

/// Configuration for chunking, lengths in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum chunk length
    pub chunk_size: usize,
    /// Characters shared with the previous chunk
    pub chunk_overlap: usize,
}

impl ChunkingConfig {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.chunk_size == 0 {
            return Err(DomainError::validation("chunk_size must be greater than 0"));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(DomainError::validation(
                "chunk_overlap must be less than chunk_size",
            ));
        }

        Ok(())
    }
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

/// A contiguous character range of a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub char_start: usize,
    pub char_end: usize,
}

impl TextSpan {
    pub fn new(content: impl Into<String>, char_start: usize, char_end: usize) -> Self {
        Self {
            content: content.into(),
            char_start,
            char_end,
        }
    }
}

/// Position of a chunk inside its parent document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub chunk_index: usize,
    pub total_chunks: usize,
    pub char_start: usize,
    pub char_end: usize,
}

/// A chunk of a corpus document carrying the parent's source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub document_id: String,
    pub source_url: String,
    pub content: String,
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Split a document into chunks with `strategy`
    pub fn from_document(
        document: &Document,
        strategy: &dyn ChunkingStrategy,
        config: &ChunkingConfig,
    ) -> Result<Vec<Chunk>, DomainError> {
        let spans = strategy.split(document.normalized_text(), config)?;
        let total = spans.len();

        Ok(spans
            .into_iter()
            .enumerate()
            .map(|(i, span)| Chunk {
                document_id: document.id.clone(),
                source_url: document.source_url.clone(),
                content: span.content,
                metadata: ChunkMetadata {
                    chunk_index: i,
                    total_chunks: total,
                    char_start: span.char_start,
                    char_end: span.char_end,
                },
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Trait for chunking strategies
pub trait ChunkingStrategy: Send + Sync + Debug {
    /// Split text into spans that cover it in order, consecutive spans
    /// overlapping by at most `chunk_overlap` characters
    fn split(&self, text: &str, config: &ChunkingConfig) -> Result<Vec<TextSpan>, DomainError>;

    fn name(&self) -> &'static str;
}

/// Rebuild the source text of one document from its chunks, dropping overlaps
pub fn reconstruct(chunks: &[Chunk]) -> String {
    let mut ordered: Vec<&Chunk> = chunks.iter().collect();
    ordered.sort_by_key(|c| c.metadata.chunk_index);

    let mut text = String::new();
    let mut covered: usize = 0;

    for chunk in ordered {
        let skip = covered.saturating_sub(chunk.metadata.char_start);
        text.extend(chunk.content.chars().skip(skip));
        covered = covered.max(chunk.metadata.char_end);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(index: usize, content: &str, start: usize) -> Chunk {
        Chunk {
            document_id: "doc".into(),
            source_url: "u".into(),
            content: content.into(),
            metadata: ChunkMetadata {
                chunk_index: index,
                total_chunks: 2,
                char_start: start,
                char_end: start + content.chars().count(),
            },
        }
    }

    #[test]
    fn test_chunking_config_default() {
        let config = ChunkingConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
    }

    #[test]
    fn test_chunking_config_validation() {
        assert!(ChunkingConfig::new(100, 50).validate().is_ok());
        assert!(ChunkingConfig::new(0, 0).validate().is_err());
        assert!(ChunkingConfig::new(100, 100).validate().is_err());
    }

    #[test]
    fn test_reconstruct_removes_overlap() {
        let chunks = vec![chunk(1, "world again", 6), chunk(0, "hello world", 0)];
        assert_eq!(reconstruct(&chunks), "hello world again");
    }

    #[test]
    fn test_reconstruct_multibyte_overlap() {
        let chunks = vec![
            chunk(0, "Fièvre ≥ 38°C", 0),
            chunk(1, "38°C : appelez", 9),
            chunk(2, "appelez l'équipe", 16),
        ];
        assert_eq!(reconstruct(&chunks), "Fièvre ≥ 38°C : appelez l'équipe");
    }

    #[test]
    fn test_reconstruct_empty() {
        assert_eq!(reconstruct(&[]), "");
    }
}
