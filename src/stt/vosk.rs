//! Local STT backend using Vosk

use crate::audio::SAMPLE_RATE;
use crate::config::Config;
use crate::error::{VaartaError, VaartaResult};
use tracing::{debug, info};
use vosk::{Model, Recognizer};

/// Vosk-based STT engine
pub struct VoskStt {
    recognizer: Recognizer,
    min_confidence: f32,
}

impl VoskStt {
    /// Create a new Vosk STT instance
    pub fn new(config: &Config) -> VaartaResult<Self> {
        let model_path = std::path::PathBuf::from(&config.vosk_model_path);

        if !model_path.exists() {
            return Err(VaartaError::Stt(format!(
                "Vosk model not found at {}",
                model_path.display()
            )));
        }

        info!("Loading Vosk model from: {}", model_path.display());

        let model_str = model_path.to_str().ok_or_else(|| {
            VaartaError::Stt(format!(
                "Vosk model path is not valid UTF-8: {}",
                model_path.display()
            ))
        })?;

        let model = Model::new(model_str)
            .ok_or_else(|| VaartaError::Stt("Failed to load Vosk model".to_string()))?;
        let recognizer = Recognizer::new(&model, SAMPLE_RATE as f32)
            .ok_or_else(|| VaartaError::Stt("Failed to create Vosk recognizer".to_string()))?;

        Ok(Self {
            recognizer,
            min_confidence: config.min_confidence,
        })
    }
}

#[async_trait::async_trait]
impl super::SttEngine for VoskStt {
    async fn transcribe(&mut self, samples: &[i16]) -> VaartaResult<Option<super::Transcript>> {
        if samples.is_empty() {
            return Ok(None);
        }

        // Fresh decode per utterance
        self.recognizer.reset();
        self.recognizer.accept_waveform(samples);

        let result = self.recognizer.final_result();
        let single = match result.single() {
            Some(s) => s,
            None => return Ok(None),
        };

        let text = match extract_text(single.text) {
            Some(t) => t,
            None => return Ok(None),
        };

        // Average word confidence
        let confidence = if single.result.is_empty() {
            1.0f32 // Default if no word-level info
        } else {
            let sum: f32 = single.result.iter().map(|w| w.conf).sum();
            sum / single.result.len() as f32
        };

        if confidence < self.min_confidence {
            info!(
                "🔇 Rejecting low-confidence recognition ({:.2}): '{}'",
                confidence, text
            );
            return Ok(None);
        }

        debug!("Vosk transcript ({:.2}): '{}'", confidence, text);
        Ok(Some(super::Transcript { text, confidence }))
    }

    fn name(&self) -> &str {
        "vosk"
    }
}

/// Extract text from Vosk result, filtering empty results
fn extract_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
