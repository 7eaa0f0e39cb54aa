//! TTS (Text-to-Speech) Module
//!
//! Optional spoken output: English prompts, and the translated text
//! voiced in the target language. Voice output is best-effort: callers
//! log and ignore failures.

use crate::config::Config;
use crate::error::VaartaResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod system;

/// Trait for TTS engines
#[async_trait]
pub trait TtsEngine: Send + Sync + std::fmt::Debug {
    /// Speak the given text in the given language ("hi", "ta", ...)
    async fn speak(&self, text: &str, lang: &str) -> VaartaResult<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured TTS engine
pub fn create_engine(config: &Config) -> VaartaResult<Arc<dyn TtsEngine>> {
    let engine: Arc<dyn TtsEngine> = match config.tts_engine.as_str() {
        "system" => Arc::new(system::SystemEngine::new()),
        other => {
            warn!("Unknown TTS engine '{}', falling back to system", other);
            Arc::new(system::SystemEngine::new())
        }
    };
    info!("🔊 TTS engine '{}' initialized", engine.name());
    Ok(engine)
}
