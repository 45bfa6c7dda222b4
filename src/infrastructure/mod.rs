//! Infrastructure layer - External service implementations

pub mod assistant;
pub mod chunking;
pub mod corpus;
pub mod credentials;
pub mod embedding;
pub mod llm;
pub mod logging;
pub mod vector_store;
