use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::PlannerError;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

/// Errors surfaced by the plan endpoint.
#[derive(Debug)]
pub enum ApiError {
    /// Query parameters out of range.
    BadRequest(String),
    /// The planner or catalog failed.
    Planner(PlannerError),
    /// The blocking generation task did not complete.
    Internal(String),
}

impl From<PlannerError> for ApiError {
    fn from(e: PlannerError) -> Self {
        ApiError::Planner(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BadRequest", msg),
            ApiError::Planner(PlannerError::InvalidConfig(msg)) => {
                (StatusCode::BAD_REQUEST, "InvalidConfig", msg)
            }
            ApiError::Planner(PlannerError::EmptyCatalog) => {
                tracing::error!("Master menu is empty");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EmptyCatalog",
                    "Master menu is empty or could not be loaded.".to_string(),
                )
            }
            ApiError::Planner(e) => {
                tracing::error!("Error loading menu file: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MenuUnavailable",
                    format!("Unable to load menu file: {}", e),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
