//! Translation Module
//!
//! Provides a unified interface over translation services:
//! - Google: public gtx endpoint (detection + translation)
//! - Noop: pass-through for offline use and tests

pub mod google;
pub mod noop;

use crate::config::Config;
use crate::error::VaartaResult;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

// Re-export main types
pub use google::GoogleTranslator;
pub use noop::NoopTranslator;

/// Trait for translation services
///
/// Languages travel as the table's ISO-like codes ("hi", "ta", ...).
#[async_trait]
pub trait Translator: Send + Sync {
    /// Detect the language of a text, returning its code
    async fn detect(&self, text: &str) -> VaartaResult<String>;

    /// Translate text between two languages
    async fn translate(&self, text: &str, from: &str, to: &str) -> VaartaResult<String>;

    /// Get the service name
    fn name(&self) -> &str;
}

/// Factory to create the configured translator
pub fn create_translator(config: &Config) -> Arc<dyn Translator> {
    let translator: Arc<dyn Translator> = match config.translator.as_str() {
        "google" => Arc::new(GoogleTranslator::new(config)),
        "none" | "disabled" => Arc::new(NoopTranslator::new()),
        other => {
            warn!("Unknown translator '{}', falling back to google", other);
            Arc::new(GoogleTranslator::new(config))
        }
    };
    info!("🌐 Translator '{}' initialized", translator.name());
    translator
}
