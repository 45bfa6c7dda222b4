//! Health check endpoints for liveness and readiness probes

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Individual component health check
#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<usize>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check reporting the document index
///
/// An empty index still accepts requests; simple questions do not need it.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let chunks = state.retriever.len();
    let index_check = if chunks > 0 {
        HealthCheck {
            name: "document_index".to_string(),
            status: HealthStatus::Healthy,
            message: None,
            chunks: Some(chunks),
        }
    } else {
        HealthCheck {
            name: "document_index".to_string(),
            status: HealthStatus::Degraded,
            message: Some("Document index is empty".to_string()),
            chunks: Some(0),
        }
    };

    let response = HealthResponse {
        status: index_check.status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(vec![index_check]),
    };

    (StatusCode::OK, Json(response))
}
