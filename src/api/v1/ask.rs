//! Question answering endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, AskRequest, AskResponse, Json};

/// POST /v1/ask
pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    if request.question.trim().is_empty() {
        return Err(ApiError::bad_request("Question must not be empty").with_param("question"));
    }

    debug!("Answering question");

    let outcome = state.chatbot.run_once(&request.question).await?;

    Ok(Json(AskResponse::from(outcome)))
}
