//! Remote STT backend
//!
//! Uploads each utterance as a WAV file to an OpenAI-compatible
//! `/v1/audio/transcriptions` endpoint. Works with the hosted API and
//! with local servers that speak the same protocol (no auth header is
//! sent when the key variable is unset).

use crate::audio::SAMPLE_RATE;
use crate::config::Config;
use crate::error::{VaartaError, VaartaResult};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, warn};

/// Remote transcription client
pub struct WhisperStt {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl WhisperStt {
    /// Create a new remote STT client from config
    pub fn new(config: &Config) -> VaartaResult<Self> {
        let api_key = match std::env::var(&config.whisper_api_key_env) {
            Ok(key) if !key.is_empty() => Some(key),
            _ => {
                warn!(
                    "{} not set, sending unauthenticated requests",
                    config.whisper_api_key_env
                );
                None
            }
        };

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.whisper_endpoint.clone(),
            model: config.whisper_model.clone(),
            api_key,
            timeout: Duration::from_secs(config.request_timeout_secs.max(15)),
        })
    }
}

#[async_trait::async_trait]
impl super::SttEngine for WhisperStt {
    async fn transcribe(&mut self, samples: &[i16]) -> VaartaResult<Option<super::Transcript>> {
        if samples.is_empty() {
            return Ok(None);
        }

        let wav = encode_wav(samples)?;
        debug!("Uploading utterance ({} bytes) for transcription", wav.len());

        let part = Part::bytes(wav)
            .file_name("utterance.wav")
            .mime_str("audio/wav")?;
        let form = Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        let mut request = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .timeout(self.timeout);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(VaartaError::Stt(format!(
                "Transcription API error ({}): {}",
                status, body_text
            )));
        }

        let body: serde_json::Value = serde_json::from_str(&body_text)?;
        let text = body
            .get("text")
            .and_then(|t| t.as_str())
            .unwrap_or("")
            .trim()
            .to_string();

        if text.is_empty() {
            return Ok(None);
        }

        debug!("Whisper transcript: '{}'", text);
        // The API reports no confidence; accept what it returns
        Ok(Some(super::Transcript {
            text,
            confidence: 1.0,
        }))
    }

    fn name(&self) -> &str {
        "whisper"
    }
}

/// Encode raw PCM samples as an in-memory mono 16-bit WAV file
fn encode_wav(samples: &[i16]) -> VaartaResult<Vec<u8>> {
    let wav_err = |e: hound::Error| VaartaError::Stt(format!("WAV encoding failed: {}", e));

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).map_err(wav_err)?;
        for &sample in samples {
            writer.write_sample(sample).map_err(wav_err)?;
        }
        writer.finalize().map_err(wav_err)?;
    }

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stt::SttEngine;

    #[test]
    fn test_encode_wav_header() {
        let wav = encode_wav(&[0i16; 1600]).unwrap();
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 44-byte header + 2 bytes per sample
        assert_eq!(wav.len(), 44 + 1600 * 2);
    }

    #[tokio::test]
    async fn test_empty_utterance_skips_upload() {
        let mut engine = WhisperStt::new(&Config::default()).unwrap();
        let result = engine.transcribe(&[]).await.unwrap();
        assert!(result.is_none());
    }
}
