//! Domain layer - Core types, contracts and errors

pub mod assistant;
pub mod corpus;
pub mod credentials;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod retrieval;

pub use assistant::{
    ChatOutcome, FallbackPolicy, Generation, GroundingPolicy, HallucinationGrader,
    HallucinationVerdict, QueryRouter, QuestionComplexity, RouteDecision, SuggestedQuestions,
};
pub use corpus::{Chunk, ChunkingConfig, ChunkingStrategy, Corpus, CorpusEntry, Document};
pub use credentials::{Credential, CredentialProvider};
pub use embedding::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse};
pub use error::DomainError;
pub use llm::{LlmProvider, LlmRequest, LlmResponse, Message, MessageRole, StructuredOutput};
pub use retrieval::{RetrievedChunk, Retriever};
