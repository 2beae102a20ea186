use async_trait::async_trait;
use reqwest::header;
use serde::Serialize;
use serde_json::Value;

use super::Synthesizer;
use crate::emotion::EmotionParams;
use crate::error::AppError;

pub const DEFAULT_API_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

const MODEL_ID: &str = "eleven_multilingual_v2";

#[derive(Debug, Serialize)]
struct SynthesisBody<'a> {
    text: &'a str,
    model_id: &'static str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
    style: f32,
    use_speaker_boost: bool,
}

/// ElevenLabs text-to-speech client.
///
/// `POST {base}/{voice_id}` with the `xi-api-key` header; returns mp3 bytes
/// or a JSON error with an HTTP status.
pub struct ElevenLabs {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ElevenLabs {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl Synthesizer for ElevenLabs {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        params: &EmotionParams,
    ) -> Result<Vec<u8>, AppError> {
        // Checked before any request goes out.
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingApiKey)?;

        tracing::info!(voice = %voice_id, text_len = text.len(), "Calling ElevenLabs API");

        let body = SynthesisBody {
            text,
            model_id: MODEL_ID,
            voice_settings: VoiceSettings {
                stability: params.stability,
                similarity_boost: params.similarity_boost,
                style: params.style,
                use_speaker_boost: true,
            },
        };

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, voice_id))
            .header("xi-api-key", api_key)
            .header(header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            // A payload that fails to parse must not mask the upstream status.
            let details = response
                .json::<Value>()
                .await
                .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
            tracing::error!(status, %details, "ElevenLabs API error");
            return Err(AppError::Upstream { status, details });
        }

        let audio = response.bytes().await?;
        tracing::info!(bytes = audio.len(), "ElevenLabs API success");

        Ok(audio.to_vec())
    }
}
