pub mod csv;
pub mod store;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use store::{HttpStore, MetricsStore};

/// One synthesis request as persisted for later export.
///
/// Stamped by the recorder at creation time, never by the client; records
/// are write-once and never updated or deleted by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationRecord {
    pub text: String,
    pub emotion: String,
    #[serde(rename = "voiceId")]
    pub voice_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Best-effort recorder for successful synthesis requests.
///
/// Recording is advisory telemetry: every failure is logged and dropped so
/// it can never affect the synthesis response.
#[derive(Clone)]
pub struct Recorder {
    store: Option<Arc<dyn MetricsStore>>,
}

impl Recorder {
    pub fn new(store: Option<Arc<dyn MetricsStore>>) -> Self {
        Self { store }
    }

    /// Write one record in a background task and return immediately.
    pub fn record_detached(&self, text: String, voice_id: String, emotion: String) {
        let recorder = self.clone();
        tokio::spawn(async move {
            recorder.record(text, voice_id, emotion).await;
        });
    }

    /// Write one record, stamped with the current instant. Store failures
    /// are logged and swallowed here.
    pub async fn record(&self, text: String, voice_id: String, emotion: String) {
        let Some(store) = &self.store else {
            tracing::debug!("Metrics store not configured, skipping record");
            return;
        };

        let record = NarrationRecord {
            text,
            emotion,
            voice_id,
            timestamp: Utc::now(),
        };

        if let Err(e) = store.create(&record).await {
            tracing::error!("Failed to record metrics: {}", e);
        }
    }
}
