//! Typed structured-output contract
//!
//! A structured call sends a declared JSON schema as the response format and
//! either yields a value of the declared type or fails with
//! [`DomainError::SchemaViolation`]. Nothing is coerced: an enum value outside
//! the declared set is a violation.

use serde::de::DeserializeOwned;
use tracing::warn;

use super::{LlmJsonSchema, LlmProvider, LlmRequest, LlmResponseFormat};
use crate::domain::DomainError;

/// A type the LLM can be asked to produce directly
pub trait StructuredOutput: DeserializeOwned + Send {
    /// Name sent along with the schema
    fn schema_name() -> &'static str;

    /// JSON schema describing the type
    fn json_schema() -> serde_json::Value;

    fn response_format() -> LlmResponseFormat {
        LlmResponseFormat::JsonSchema {
            json_schema: LlmJsonSchema::new(Self::schema_name(), Self::json_schema()),
        }
    }

    /// Decode a completion into the declared type
    fn decode(content: &str) -> Result<Self, DomainError> {
        let json_str = extract_json(content).unwrap_or(content);

        serde_json::from_str(json_str).map_err(|e| {
            warn!(
                schema = Self::schema_name(),
                error = %e,
                "Structured response did not match schema"
            );
            DomainError::schema_violation(Self::schema_name(), e.to_string())
        })
    }
}

/// Run a chat completion constrained to `T`'s schema
pub async fn structured_chat<T: StructuredOutput>(
    provider: &dyn LlmProvider,
    model: &str,
    mut request: LlmRequest,
) -> Result<T, DomainError> {
    request.response_format = Some(T::response_format());

    let response = provider.chat(model, request).await?;

    T::decode(response.content())
}

/// Extract a JSON object from a string (handles markdown code blocks)
fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if start < end {
        Some(&text[start..=end])
    } else {
        None
    }
}
