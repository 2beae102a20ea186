use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthResponse, NarrateRequest};
use crate::api::routes::AppState;
use crate::emotion;
use crate::error::AppError;
use crate::metrics::csv;

pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NarrateRequest>,
) -> Result<Response, AppError> {
    // Validate input
    if request.text.is_empty() || request.voice_id.is_empty() {
        return Err(AppError::BadRequest("Text and voiceId are required".into()));
    }

    let params = emotion::resolve(&request.emotion);

    let audio = state
        .synthesizer
        .synthesize(&request.text, &request.voice_id, &params)
        .await?;

    // Fire-and-forget: recording never affects the audio response.
    state
        .recorder
        .record_detached(request.text, request.voice_id, request.emotion);

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}

pub async fn export(State(state): State<Arc<AppState>>) -> Result<Response, AppError> {
    let store = state.store.as_ref().ok_or(AppError::StoreUnavailable)?;

    let records = store.list().await?;

    if records.is_empty() {
        return Err(AppError::NoRecords);
    }

    let body = csv::render(&records);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"emo_narrator_metrics.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
