use crate::error::VaartaResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Speech recognition
    pub stt_engine: String,
    pub vosk_model_path: String,
    pub whisper_endpoint: String,
    pub whisper_model: String,
    pub whisper_api_key_env: String,
    pub min_confidence: f32,

    // Listening
    pub energy_threshold: f32,
    pub pause_threshold_ms: u64,
    pub max_utterance_secs: u64,

    // Translation
    pub translator: String,
    pub translate_endpoint: String,
    pub request_timeout_secs: u64,

    // TTS prompts
    pub tts_enabled: bool,
    pub tts_engine: String,

    // Session
    pub default_target: String,
    pub wrap_width: usize,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stt_engine: "whisper".to_string(),
            vosk_model_path: dirs::data_dir()
                .unwrap_or_default()
                .join("vaarta/models/vosk-model-small-en-us")
                .to_string_lossy()
                .to_string(),
            whisper_endpoint: "https://api.openai.com/v1/audio/transcriptions".to_string(),
            whisper_model: "whisper-1".to_string(),
            whisper_api_key_env: "OPENAI_API_KEY".to_string(),
            min_confidence: 0.5,
            energy_threshold: 500.0,
            pause_threshold_ms: 1000,
            max_utterance_secs: 15,
            translator: "google".to_string(),
            translate_endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            request_timeout_secs: 10,
            tts_enabled: false,
            tts_engine: "system".to_string(),
            default_target: String::new(),
            wrap_width: 80,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from file, or create default
    pub fn load() -> VaartaResult<Self> {
        let config_path = config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    // Graceful degradation: log warning and use defaults
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Backup corrupt file for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(&config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> VaartaResult<()> {
        let config_path = config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vaarta")
        .join("config.json")
}
