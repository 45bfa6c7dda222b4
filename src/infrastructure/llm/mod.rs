//! LLM provider implementations

mod http_client;
mod mistral;

pub use http_client::{HttpClient, HttpClientTrait};
pub use mistral::{MistralProvider, DEFAULT_MISTRAL_BASE_URL};

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
