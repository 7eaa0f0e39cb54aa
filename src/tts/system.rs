//! System TTS engine
//!
//! Shells out to speech-dispatcher or espeak-ng, selecting the voice
//! from the language code so translated text is read in the target
//! language rather than an English voice.

use super::TtsEngine;
use crate::error::{VaartaError, VaartaResult};
use async_trait::async_trait;
use std::process::Command;
use tracing::debug;

#[derive(Debug)]
pub struct SystemEngine;

impl Default for SystemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Voice identifier for a language code
///
/// Both spd-say and espeak-ng accept ISO-style codes directly; an
/// empty code falls back to English.
fn voice(lang: &str) -> &str {
    let lang = lang.trim();
    if lang.is_empty() {
        "en"
    } else {
        lang
    }
}

#[async_trait]
impl TtsEngine for SystemEngine {
    async fn speak(&self, text: &str, lang: &str) -> VaartaResult<()> {
        let voice = voice(lang);
        debug!("System speaking [{}]: {}", voice, text);

        // Try spd-say (speech-dispatcher) or espeak-ng
        if Command::new("spd-say")
            .args(["-l", voice])
            .arg(text)
            .spawn()
            .is_ok()
        {
            return Ok(());
        }

        if Command::new("espeak-ng")
            .args(["-v", voice])
            .arg(text)
            .spawn()
            .is_ok()
        {
            return Ok(());
        }

        Err(VaartaError::Tts(
            "No system TTS command found (tried spd-say, espeak-ng)".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "system"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_falls_back_to_english() {
        assert_eq!(voice(""), "en");
        assert_eq!(voice("  "), "en");
        assert_eq!(voice("hi"), "hi");
        assert_eq!(voice("ta"), "ta");
    }
}
