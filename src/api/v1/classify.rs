//! Question complexity endpoint

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ClassifyRequest, ClassifyResponse, Json};

/// POST /v1/classify
pub async fn classify_question(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let complexity = state.classifier.classify(&request.question).await?;

    Ok(Json(complexity.into()))
}
