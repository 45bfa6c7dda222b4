//! Corpus documents and chunk model

mod chunk;
mod document;

pub use chunk::{reconstruct, Chunk, ChunkMetadata, ChunkingConfig, ChunkingStrategy, TextSpan};
pub use document::{Corpus, CorpusEntry, CorpusText, Document};
