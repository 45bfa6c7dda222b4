//! Error envelope returned by every endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    ServerError,
    /// The hosted model service failed or broke its contract
    UpstreamError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::UpstreamError => write!(f, "upstream_error"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                    code: None,
                },
            },
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, ApiErrorType::UpstreamError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if !matches!(err, DomainError::Validation { .. } | DomainError::NotFound { .. }) {
            error!(error = %err, "Request failed");
        }

        match err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Provider { provider, message } => {
                Self::bad_gateway(format!("{}: {}", provider, message)).with_code("provider_error")
            }
            DomainError::SchemaViolation { schema, message } => {
                Self::bad_gateway(message).with_param(schema).with_code("schema_violation")
            }
            DomainError::Credential { message }
            | DomainError::Configuration { message }
            | DomainError::Corpus { message }
            | DomainError::Template { message }
            | DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.response.error.error_type, self.response.error.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_with_param() {
        let err = ApiError::bad_request("Invalid value")
            .with_param("question")
            .with_code("empty");

        assert_eq!(err.response.error.param, Some("question".to_string()));
        assert_eq!(err.response.error.code, Some("empty".to_string()));
    }

    #[test]
    fn test_domain_error_status_mapping() {
        let cases = [
            (DomainError::validation("empty"), StatusCode::BAD_REQUEST),
            (DomainError::provider("mistral", "HTTP 503"), StatusCode::BAD_GATEWAY),
            (
                DomainError::schema_violation("route_query", "unknown variant"),
                StatusCode::BAD_GATEWAY,
            ),
            (DomainError::corpus("missing"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::configuration("bad"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain_err, status) in cases {
            let api_err: ApiError = domain_err.into();
            assert_eq!(api_err.status, status);
        }
    }

    #[test]
    fn test_schema_violation_names_schema() {
        let api_err: ApiError = DomainError::schema_violation("grade_hallucinations", "x").into();

        assert_eq!(api_err.response.error.error_type, ApiErrorType::UpstreamError);
        assert_eq!(api_err.response.error.param.as_deref(), Some("grade_hallucinations"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::bad_gateway("mistral: timeout");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("\"type\":\"upstream_error\""));
        assert!(json.contains("mistral: timeout"));
        assert!(!json.contains("param"));
    }
}
