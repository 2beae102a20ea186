pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct NarrateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "voiceId")]
    pub voice_id: String,
    #[serde(default)]
    pub emotion: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
