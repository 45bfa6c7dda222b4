//! Embedding provider implementations

mod mistral;

pub use mistral::MistralEmbeddingProvider;

// Re-export HTTP client for use by embedding providers
pub use super::llm::{HttpClient, HttpClientTrait};
