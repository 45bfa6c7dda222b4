use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::http_client::HttpClientTrait;
use crate::domain::llm::{FinishReason, LlmResponseFormat, Usage};
use crate::domain::{Credential, DomainError, LlmProvider, LlmRequest, LlmResponse, Message};

pub const DEFAULT_MISTRAL_BASE_URL: &str = "https://api.mistral.ai";

/// Mistral chat-completions provider
pub struct MistralProvider<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    project_id: Option<String>,
    base_url: String,
}

impl<C: HttpClientTrait> std::fmt::Debug for MistralProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MistralProvider")
            .field("client", &self.client)
            .field("auth_header", &"[REDACTED]")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl<C: HttpClientTrait> MistralProvider<C> {
    pub fn new(client: C, credential: &Credential) -> Self {
        Self::with_base_url(client, credential, DEFAULT_MISTRAL_BASE_URL)
    }

    pub fn with_base_url(client: C, credential: &Credential, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            auth_header: format!("Bearer {}", credential.api_key()),
            project_id: credential.project_id().map(str::to_string),
            base_url,
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_request(&self, model: &str, request: &LlmRequest) -> serde_json::Value {
        let messages: Vec<MistralMessage> = request
            .messages
            .iter()
            .map(MistralMessage::from_domain)
            .collect();

        let mut body = serde_json::json!({
            "model": model,
            "messages": messages,
        });

        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        if let Some(top_p) = request.top_p {
            body["top_p"] = serde_json::json!(top_p);
        }

        if let Some(ref stop) = request.stop {
            body["stop"] = serde_json::json!(stop);
        }

        if let Some(ref response_format) = request.response_format {
            body["response_format"] = match response_format {
                LlmResponseFormat::Text => serde_json::json!({"type": "text"}),
                LlmResponseFormat::JsonObject => serde_json::json!({"type": "json_object"}),
                LlmResponseFormat::JsonSchema { json_schema } => serde_json::json!({
                    "type": "json_schema",
                    "json_schema": {
                        "name": json_schema.name,
                        "strict": json_schema.strict,
                        "schema": json_schema.schema
                    }
                }),
            };
        }

        body
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

    fn parse_response(&self, json: serde_json::Value) -> Result<LlmResponse, DomainError> {
        let response: MistralResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("mistral", format!("Failed to parse response: {}", e))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("mistral", "No choices in response"))?;

        let message = Message::assistant(choice.message.content.unwrap_or_default());

        let mut llm_response = LlmResponse::new(response.id, response.model, message);

        if let Some(reason) = choice.finish_reason {
            llm_response = llm_response.with_finish_reason(FinishReason::parse(&reason));
        }

        if let Some(usage) = response.usage {
            llm_response =
                llm_response.with_usage(Usage::new(usage.prompt_tokens, usage.completion_tokens));
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for MistralProvider<C> {
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let url = self.chat_completions_url();
        let body = self.build_request(model, &request);

        debug!(model = %model, messages = request.messages.len(), "Sending chat completion");

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "mistral"
    }

    fn available_models(&self) -> Vec<&'static str> {
        vec![
            "mistral-large-latest",
            "mistral-medium-latest",
            "mistral-small-latest",
            "open-mistral-nemo",
        ]
    }
}

// Mistral API types

#[derive(Debug, Serialize)]
struct MistralMessage {
    role: &'static str,
    content: String,
}

impl MistralMessage {
    fn from_domain(message: &Message) -> Self {
        Self {
            role: message.role.as_str(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MistralResponse {
    id: String,
    model: String,
    choices: Vec<MistralChoice>,
    usage: Option<MistralUsage>,
}

#[derive(Debug, Deserialize)]
struct MistralChoice {
    message: MistralResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MistralResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MistralUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
