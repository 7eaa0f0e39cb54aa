//! Vaarta Error Types
//!
//! Centralized error handling for the assistant. Engine traits and the
//! config layer all return `VaartaResult`; the pipeline downgrades
//! these errors to per-stage fallbacks instead of failing a turn.

use thiserror::Error;

/// Central error type for Vaarta
#[derive(Error, Debug)]
pub enum VaartaError {
    #[error("Speech recognition error: {0}")]
    Stt(String),

    #[error("Audio capture error: {0}")]
    Audio(String),

    #[error("Translation error: {0}")]
    Translate(String),

    #[error("Unsupported language: {0}")]
    Language(String),

    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Vaarta operations
pub type VaartaResult<T> = Result<T, VaartaError>;
