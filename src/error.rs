use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("ElevenLabs API key is missing")]
    MissingApiKey,

    #[error("Speech synthesis failed upstream with status {status}")]
    Upstream { status: u16, details: Value },

    #[error("Metrics store is not configured")]
    StoreUnavailable,

    #[error("Metrics store reported errors")]
    Store(Value),

    #[error("No metrics found")]
    NoRecords,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    #[allow(dead_code)]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "ElevenLabs API key is missing" })),
            )
                .into_response(),
            AppError::Upstream { status, details } => {
                // Pass the provider's status through to the caller.
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    status,
                    Json(json!({ "error": "Failed to generate speech", "details": details })),
                )
                    .into_response()
            }
            AppError::StoreUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": "Metrics store unavailable",
                    "message": "The metrics data store is not configured",
                })),
            )
                .into_response(),
            AppError::Store(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch metrics", "details": details })),
            )
                .into_response(),
            AppError::NoRecords => {
                (StatusCode::NOT_FOUND, "No metrics found").into_response()
            }
            AppError::Request(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error", "details": e.to_string() })),
            )
                .into_response(),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal server error", "details": msg })),
            )
                .into_response(),
        }
    }
}
