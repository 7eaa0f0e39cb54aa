//! Mock STT Engine for Testing
//!
//! Provides controlled responses for integration tests.

use std::sync::{Arc, Mutex};
use vaarta::error::VaartaResult;
use vaarta::stt::{SttEngine, Transcript};

/// Mock STT engine that returns predetermined responses
pub struct MockStt {
    /// Queue of responses to return
    pub responses: Vec<Transcript>,
    /// Current index in responses
    idx: usize,
    /// Record all utterances received (for verification)
    pub received: Arc<Mutex<Vec<Vec<i16>>>>,
}

impl MockStt {
    pub fn new(responses: Vec<Transcript>) -> Self {
        Self {
            responses,
            idx: 0,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that returns a single phrase
    pub fn with_phrase(text: &str, confidence: f32) -> Self {
        Self::new(vec![Transcript {
            text: text.to_string(),
            confidence,
        }])
    }
}

#[async_trait::async_trait]
impl SttEngine for MockStt {
    async fn transcribe(&mut self, samples: &[i16]) -> VaartaResult<Option<Transcript>> {
        // Record received audio
        if let Ok(mut received) = self.received.lock() {
            received.push(samples.to_vec());
        }

        // Return next response if available
        if self.idx < self.responses.len() {
            let result = self.responses[self.idx].clone();
            self.idx += 1;
            Ok(Some(result))
        } else {
            Ok(None)
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_stt_returns_responses() {
        let mut mock = MockStt::with_phrase("hello world", 0.95);
        let result = mock.transcribe(&[0i16; 100]).await.unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().text, "hello world");
    }

    #[tokio::test]
    async fn test_mock_stt_exhausts_queue() {
        let mut mock = MockStt::with_phrase("once", 0.9);
        assert!(mock.transcribe(&[0i16; 10]).await.unwrap().is_some());
        assert!(mock.transcribe(&[0i16; 10]).await.unwrap().is_none());
        assert_eq!(mock.received.lock().unwrap().len(), 2);
    }
}
