use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod emotion;
mod error;
mod metrics;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use metrics::{HttpStore, MetricsStore, Recorder};
use tts::ElevenLabs;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = Config::from_env();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    tracing::info!("Emo Narrator Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Static directory: {}", config.static_dir);

    if config.api_key.is_none() {
        tracing::warn!("ELEVENLABS_API_KEY is not set, synthesis requests will fail");
    }

    let synthesizer = Arc::new(ElevenLabs::new(
        config.api_url.clone(),
        config.api_key.clone(),
    ));

    let store: Option<Arc<dyn MetricsStore>> = config.store_url.as_ref().map(|url| {
        Arc::new(HttpStore::new(url.clone(), config.store_api_key.clone()))
            as Arc<dyn MetricsStore>
    });

    if store.is_none() {
        tracing::warn!("METRICS_STORE_URL is not set, usage recording and export are disabled");
    }

    // Create app state
    let state = Arc::new(AppState {
        synthesizer,
        recorder: Recorder::new(store.clone()),
        store,
    });

    // Create router
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Server error");
}
