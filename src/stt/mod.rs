//! STT (Speech-to-Text) Module
//!
//! Provides multiple recognition backends:
//! - Whisper: remote OpenAI-compatible transcription API
//! - Vosk: local offline recognition

pub mod vosk;
pub mod whisper;

use crate::config::Config;
use crate::error::VaartaResult;
use async_trait::async_trait;
use tracing::{info, warn};

// Re-export main types
pub use vosk::VoskStt;
pub use whisper::WhisperStt;

/// Recognition result with confidence score
#[derive(Debug, Clone)]
pub struct Transcript {
    pub text: String,
    pub confidence: f32,
}

/// Trait for STT engines
///
/// Engines receive one complete utterance (16 kHz mono i16) at a time;
/// `Ok(None)` means the audio could not be understood, `Err` that the
/// engine itself failed.
#[async_trait]
pub trait SttEngine: Send {
    /// Transcribe a full utterance
    /// Results below the configured confidence are filtered out internally
    async fn transcribe(&mut self, samples: &[i16]) -> VaartaResult<Option<Transcript>>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured STT engine
pub fn create_engine(config: &Config) -> VaartaResult<Box<dyn SttEngine>> {
    let engine: Box<dyn SttEngine> = match config.stt_engine.as_str() {
        "vosk" => Box::new(VoskStt::new(config)?),
        "whisper" => Box::new(WhisperStt::new(config)?),
        other => {
            warn!("Unknown STT engine '{}', falling back to whisper", other);
            Box::new(WhisperStt::new(config)?)
        }
    };
    info!("🎤 STT engine '{}' initialized", engine.name());
    Ok(engine)
}
