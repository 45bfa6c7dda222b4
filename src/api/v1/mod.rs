//! Assistant v1 API endpoints

pub mod ask;
pub mod classify;
pub mod suggestions;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/ask", post(ask::ask))
        .route(
            "/suggestions",
            get(suggestions::canned_suggestions).post(suggestions::suggest_questions),
        )
        .route("/classify", post(classify::classify_question))
}
