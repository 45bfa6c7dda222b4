//! LLM provider domain models and traits

mod message;
mod provider;
mod request;
mod response;
mod structured;

pub use message::{Message, MessageRole};
pub use provider::LlmProvider;
pub use request::{LlmJsonSchema, LlmRequest, LlmRequestBuilder, LlmResponseFormat};
pub use response::{FinishReason, LlmResponse, Usage};
pub use structured::{structured_chat, StructuredOutput};

#[cfg(test)]
pub use provider::mock::MockLlmProvider;
