//! Text chunking strategies

mod recursive;

pub use recursive::RecursiveChunker;
