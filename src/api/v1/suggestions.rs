//! Suggested question endpoints

use axum::extract::State;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, SuggestRequest, SuggestionsResponse};
use crate::domain::assistant::CANNED_SUGGESTIONS;

/// GET /v1/suggestions
pub async fn canned_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        questions: CANNED_SUGGESTIONS.iter().map(|q| q.to_string()).collect(),
    })
}

/// POST /v1/suggestions
pub async fn suggest_questions(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestionsResponse>, ApiError> {
    let suggestions = state
        .suggester
        .suggest(&request.conversation, request.context.as_deref())
        .await?;

    Ok(Json(suggestions.into()))
}
