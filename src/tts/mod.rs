pub mod elevenlabs;

use async_trait::async_trait;

use crate::emotion::EmotionParams;
use crate::error::AppError;

pub use elevenlabs::ElevenLabs;

/// A speech synthesis backend.
///
/// The production implementation calls the ElevenLabs REST API; tests swap
/// in stubs so the handlers can be driven without network access.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Synthesize `text` with the given voice and resolved emotion
    /// parameters, returning the provider's audio bytes unmodified.
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        params: &EmotionParams,
    ) -> Result<Vec<u8>, AppError>;
}
