//! Mistral embedding provider implementation

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::HttpClientTrait;
use crate::domain::embedding::{
    Embedding, EmbeddingInput, EmbeddingProvider, EmbeddingRequest, EmbeddingResponse,
    EmbeddingUsage,
};
use crate::domain::{Credential, DomainError};
use crate::infrastructure::llm::DEFAULT_MISTRAL_BASE_URL;

/// Known Mistral embedding models and their dimensions
const EMBEDDING_MODELS: &[(&str, usize)] = &[("mistral-embed", 1024)];

/// Mistral embedding provider
pub struct MistralEmbeddingProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    project_id: Option<String>,
    base_url: String,
}

impl<C: HttpClientTrait> std::fmt::Debug for MistralEmbeddingProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MistralEmbeddingProvider")
            .field("client", &self.client)
            .field("auth_header", &"[REDACTED]")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl<C: HttpClientTrait> MistralEmbeddingProvider<C> {
    pub fn new(client: C, credential: &Credential) -> Self {
        Self::with_base_url(client, credential, DEFAULT_MISTRAL_BASE_URL)
    }

    pub fn with_base_url(client: C, credential: &Credential, base_url: impl Into<String>) -> Self {
        Self {
            client,
            auth_header: format!("Bearer {}", credential.api_key()),
            project_id: credential.project_id().map(str::to_string),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn embeddings_url(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        if let Some(ref project_id) = self.project_id {
            headers.push(("X-Project-Id", project_id.as_str()));
        }

        headers
    }

    fn build_request(&self, request: &EmbeddingRequest) -> serde_json::Value {
        // The endpoint always takes a list
        let input = match request.input() {
            EmbeddingInput::Single(s) => serde_json::json!([s]),
            EmbeddingInput::Batch(v) => serde_json::json!(v),
        };

        serde_json::json!({
            "model": request.model(),
            "input": input,
        })
    }

    fn parse_response(
        &self,
        json: serde_json::Value,
        expected: usize,
    ) -> Result<EmbeddingResponse, DomainError> {
        let response: MistralEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("mistral", format!("Failed to parse embedding response: {}", e))
        })?;

        if response.data.len() != expected {
            return Err(DomainError::provider(
                "mistral",
                format!(
                    "Expected {} embeddings, received {}",
                    expected,
                    response.data.len()
                ),
            ));
        }

        let embeddings: Vec<Embedding> = response
            .data
            .into_iter()
            .map(|d| Embedding::new(d.index, d.embedding))
            .collect();

        let usage = response
            .usage
            .map(|u| EmbeddingUsage::new(u.prompt_tokens, u.total_tokens))
            .unwrap_or_default();

        Ok(EmbeddingResponse::new(response.model, embeddings, usage))
    }
}

#[async_trait]
impl<C: HttpClientTrait> EmbeddingProvider for MistralEmbeddingProvider<C> {
    async fn embed(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse, DomainError> {
        let url = self.embeddings_url();
        let body = self.build_request(&request);
        let expected = request.input().len();

        debug!(model = %request.model(), inputs = expected, "Requesting embeddings");

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response, expected)
    }

    fn provider_name(&self) -> &'static str {
        "mistral"
    }

    fn default_model(&self) -> &'static str {
        "mistral-embed"
    }

    fn dimensions(&self, model: &str) -> Option<usize> {
        EMBEDDING_MODELS
            .iter()
            .find(|(name, _)| *name == model)
            .map(|(_, dims)| *dims)
    }
}

// Mistral API types for embeddings

#[derive(Debug, Deserialize)]
struct MistralEmbeddingResponse {
    model: String,
    data: Vec<MistralEmbeddingData>,
    usage: Option<MistralEmbeddingUsage>,
}

#[derive(Debug, Deserialize)]
struct MistralEmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct MistralEmbeddingUsage {
    prompt_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::MockHttpClient;

    const TEST_URL: &str = "https://api.mistral.ai/v1/embeddings";

    fn create_mock_response(num_embeddings: usize, dimensions: usize) -> serde_json::Value {
        // Returned out of order to check that the response is re-sorted by index
        let data: Vec<serde_json::Value> = (0..num_embeddings)
            .rev()
            .map(|i| {
                let embedding: Vec<f32> = (0..dimensions).map(|j| (i + j) as f32 * 0.001).collect();
                serde_json::json!({
                    "index": i,
                    "embedding": embedding,
                    "object": "embedding"
                })
            })
            .collect();

        serde_json::json!({
            "id": "emb-1",
            "object": "list",
            "model": "mistral-embed",
            "data": data,
            "usage": {"prompt_tokens": 10, "total_tokens": 10}
        })
    }

    #[tokio::test]
    async fn test_embed_single_text() {
        let client = MockHttpClient::new().with_response(TEST_URL, create_mock_response(1, 1024));
        let provider = MistralEmbeddingProvider::new(client, &Credential::new("test-api-key"));

        let request = EmbeddingRequest::single("mistral-embed", "What is neutropenia?");
        let response = provider.embed(request).await.unwrap();

        assert_eq!(response.model(), "mistral-embed");
        assert_eq!(response.embeddings().len(), 1);
        assert_eq!(response.embeddings()[0].dimensions(), 1024);
        assert_eq!(response.usage().prompt_tokens, 10);

        let body = &provider.client.bodies()[0];
        assert_eq!(body["input"], serde_json::json!(["What is neutropenia?"]));
    }

    #[tokio::test]
    async fn test_embed_batch_keeps_input_order() {
        let client = MockHttpClient::new().with_response(TEST_URL, create_mock_response(3, 8));
        let provider = MistralEmbeddingProvider::new(client, &Credential::new("test-api-key"));

        let request = EmbeddingRequest::batch(
            "mistral-embed",
            vec!["first".into(), "second".into(), "third".into()],
        );
        let response = provider.embed(request).await.unwrap();

        for (i, emb) in response.embeddings().iter().enumerate() {
            assert_eq!(emb.index(), i);
        }
    }

    #[tokio::test]
    async fn test_embed_count_mismatch() {
        let client = MockHttpClient::new().with_response(TEST_URL, create_mock_response(1, 8));
        let provider = MistralEmbeddingProvider::new(client, &Credential::new("k"));

        let request = EmbeddingRequest::batch("mistral-embed", vec!["a".into(), "b".into()]);
        let result = provider.embed(request).await;

        assert!(matches!(result, Err(DomainError::Provider { .. })));
    }

    #[tokio::test]
    async fn test_embed_error() {
        let client = MockHttpClient::new().with_error(TEST_URL, "Rate limit exceeded");
        let provider = MistralEmbeddingProvider::new(client, &Credential::new("k"));

        let request = EmbeddingRequest::single("mistral-embed", "Hello");
        assert!(provider.embed(request).await.is_err());
    }

    #[test]
    fn test_provider_info() {
        let provider = MistralEmbeddingProvider::new(MockHttpClient::new(), &Credential::new("k"));

        assert_eq!(provider.provider_name(), "mistral");
        assert_eq!(provider.default_model(), "mistral-embed");
        assert_eq!(provider.dimensions("mistral-embed"), Some(1024));
        assert_eq!(provider.dimensions("unknown-model"), None);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider =
            MistralEmbeddingProvider::new(MockHttpClient::new(), &Credential::new("sk-SECRET-123"));
        let printed = format!("{:?}", provider);

        assert!(!printed.contains("sk-SECRET-123"));
        assert!(printed.contains("[REDACTED]"));
    }
}
