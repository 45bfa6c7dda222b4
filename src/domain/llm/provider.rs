use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Trait for hosted chat-completion services
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a chat completion request
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// List available models for this provider
    fn available_models(&self) -> Vec<&'static str>;
}

#[cfg(test)]
pub mod mock {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::llm::Message;

    /// Replays canned completions in order and records every request
    #[derive(Debug)]
    pub struct MockLlmProvider {
        name: &'static str,
        responses: Mutex<VecDeque<Result<String, String>>>,
        requests: Mutex<Vec<(String, LlmRequest)>>,
    }

    impl MockLlmProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_response(self, content: impl Into<String>) -> Self {
            self.responses.lock().unwrap().push_back(Ok(content.into()));
            self
        }

        pub fn with_error(self, error: impl Into<String>) -> Self {
            self.responses.lock().unwrap().push_back(Err(error.into()));
            self
        }

        pub fn requests(&self) -> Vec<(String, LlmRequest)> {
            self.requests.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
            self.requests
                .lock()
                .unwrap()
                .push((model.to_string(), request));

            match self.responses.lock().unwrap().pop_front() {
                Some(Ok(content)) => Ok(LlmResponse::new(
                    format!("mock-{}", self.call_count()),
                    model,
                    Message::assistant(content),
                )),
                Some(Err(error)) => Err(DomainError::provider(self.name, error)),
                None => Err(DomainError::provider(self.name, "No mock response configured")),
            }
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }

        fn available_models(&self) -> Vec<&'static str> {
            vec!["mock-model"]
        }
    }
}
