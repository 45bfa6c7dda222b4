//! Nearest-neighbour retrieval over embedded chunks

mod retriever;

pub use retriever::{format_context, IndexEntry, RetrievedChunk, Retriever, DEFAULT_TOP_K};

#[cfg(test)]
pub use retriever::mock::MockRetriever;
