//! Mock Translator for Testing
//!
//! Routes on the destination code: requests into English use one
//! canned reply, requests into the target language the other. Either
//! side (or detection) can be forced to fail, and all translate calls
//! are recorded for verification.

use std::sync::Mutex;
use vaarta::error::{VaartaError, VaartaResult};
use vaarta::translate::Translator;

pub struct MockTranslator {
    detected: Option<String>,
    to_target: Option<String>,
    to_english: Option<String>,
    /// Recorded (text, from, to) triples
    pub calls: Mutex<Vec<(String, String, String)>>,
}

impl MockTranslator {
    pub fn new(detected: &str, to_target: &str, to_english: &str) -> Self {
        Self {
            detected: Some(detected.to_string()),
            to_target: Some(to_target.to_string()),
            to_english: Some(to_english.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_detect(mut self) -> Self {
        self.detected = None;
        self
    }

    pub fn failing_to_target(mut self) -> Self {
        self.to_target = None;
        self
    }

    pub fn failing_to_english(mut self) -> Self {
        self.to_english = None;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn detect(&self, _text: &str) -> VaartaResult<String> {
        self.detected
            .clone()
            .ok_or_else(|| VaartaError::Translate("detection unavailable".to_string()))
    }

    async fn translate(&self, text: &str, from: &str, to: &str) -> VaartaResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), from.to_string(), to.to_string()));

        let reply = if to == "en" {
            &self.to_english
        } else {
            &self.to_target
        };
        reply
            .clone()
            .ok_or_else(|| VaartaError::Translate("translation unavailable".to_string()))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
