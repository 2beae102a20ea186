use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::metrics::{MetricsStore, Recorder};
use crate::tts::Synthesizer;

pub struct AppState {
    pub synthesizer: Arc<dyn Synthesizer>,
    pub recorder: Recorder,
    pub store: Option<Arc<dyn MetricsStore>>,
}

pub fn create_router(state: Arc<AppState>, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/synthesize", post(handlers::synthesize))
        .route("/export", get(handlers::export))
        .route("/health", get(handlers::health))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
