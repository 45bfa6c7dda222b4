//! In-memory vector index and its builder

mod builder;
mod in_memory;

pub use builder::{DocumentStoreBuilder, DEFAULT_EMBEDDING_BATCH_SIZE};
pub use in_memory::InMemoryVectorIndex;
