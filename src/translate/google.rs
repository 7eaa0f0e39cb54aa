//! Google Translate client
//!
//! Talks to the public `translate_a/single?client=gtx` endpoint. The
//! reply is a positional JSON array: element 0 holds the translated
//! segments, element 2 the detected source language.

use crate::config::Config;
use crate::error::{VaartaError, VaartaResult};
use serde_json::Value;
use std::time::Duration;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::Retry;
use tracing::debug;

/// Number of retries for transient request failures
const RETRIES: usize = 2;

/// Google gtx translation client
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl GoogleTranslator {
    /// Create a new client from config
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.translate_endpoint.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// One translation request, `sl` may be "auto"
    async fn request(&self, text: &str, sl: &str, tl: &str) -> VaartaResult<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", sl),
                ("tl", tl),
                ("dt", "t"),
                ("q", text),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VaartaError::Translate(format!(
                "Translation API error ({}): {}",
                status, body
            )));
        }

        let body: Value = response.json().await?;
        Ok(body)
    }

    async fn request_with_retry(&self, text: &str, sl: &str, tl: &str) -> VaartaResult<Value> {
        let strategy = FixedInterval::from_millis(500).take(RETRIES);
        Retry::spawn(strategy, || self.request(text, sl, tl)).await
    }
}

#[async_trait::async_trait]
impl super::Translator for GoogleTranslator {
    async fn detect(&self, text: &str) -> VaartaResult<String> {
        let body = self.request_with_retry(text, "auto", "en").await?;
        let detected = parse_detected(&body)?;
        debug!("Detected language: {}", detected);
        Ok(detected)
    }

    async fn translate(&self, text: &str, from: &str, to: &str) -> VaartaResult<String> {
        if from == to {
            return Ok(text.to_string());
        }

        let body = self.request_with_retry(text, from, to).await?;
        let translated = parse_translation(&body)?;
        debug!("Translated ({} -> {}): '{}'", from, to, translated);
        Ok(translated)
    }

    fn name(&self) -> &str {
        "google"
    }
}

/// Concatenate the translated segments from element 0 of the reply
fn parse_translation(body: &Value) -> VaartaResult<String> {
    let segments = body.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
        VaartaError::Translate("Translation response missing segment list".to_string())
    })?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|t| t.as_str()) {
            translated.push_str(text);
        }
    }

    let translated = translated.trim().to_string();
    if translated.is_empty() {
        return Err(VaartaError::Translate(
            "Translation response had no text".to_string(),
        ));
    }
    Ok(translated)
}

/// Read the detected source language from element 2 of the reply
fn parse_detected(body: &Value) -> VaartaResult<String> {
    body.get(2)
        .and_then(|v| v.as_str())
        .map(|s| s.to_lowercase())
        .ok_or_else(|| {
            VaartaError::Translate("Translation response missing detected language".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_translation_joins_segments() {
        let body = json!([
            [
                ["नमस्ते ", "hello ", null],
                ["दुनिया", "world", null]
            ],
            null,
            "en"
        ]);
        assert_eq!(parse_translation(&body).unwrap(), "नमस्ते दुनिया");
    }

    #[test]
    fn test_parse_translation_rejects_empty() {
        let body = json!([[], null, "en"]);
        assert!(parse_translation(&body).is_err());

        let body = json!({"error": "bad request"});
        assert!(parse_translation(&body).is_err());
    }

    #[test]
    fn test_parse_detected() {
        let body = json!([[["hola", "hello", null]], null, "EN"]);
        assert_eq!(parse_detected(&body).unwrap(), "en");

        let body = json!([[["x", "y", null]], null, null]);
        assert!(parse_detected(&body).is_err());
    }
}
