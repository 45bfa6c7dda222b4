//! Request and response bodies of the HTTP surface

pub mod assistant;
pub mod error;
pub mod json;

pub use assistant::{
    AskRequest, AskResponse, ClassifyRequest, ClassifyResponse, SuggestRequest,
    SuggestionsResponse,
};
pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
