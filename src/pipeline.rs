//! Turn Pipeline
//!
//! Chains the external stages for one conversation turn: detect source
//! language, translate to the target, back-translate to English, score
//! sentiment. Every stage degrades instead of failing the turn:
//! detection falls back to English, a failed translation keeps the
//! input text, a failed back-translation keeps the target-language
//! text, and sentiment errors score 0.0.

use crate::language::LanguageEntry;
use crate::sentiment::{Sentiment, SentimentAnalyzer};
use crate::session::ConversationTurn;
use crate::translate::Translator;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fallback source language when detection fails
const FALLBACK_SOURCE: &str = "en";

/// Runs the per-turn stage chain
pub struct Assistant {
    translator: Arc<dyn Translator>,
    analyzer: SentimentAnalyzer,
}

impl Assistant {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            analyzer: SentimentAnalyzer::new(),
        }
    }

    /// Process one recognized utterance into a completed turn
    ///
    /// Never fails: every external stage has a fallback value.
    pub async fn run_turn(&self, input: &str, target: &LanguageEntry) -> ConversationTurn {
        // Detect the source language
        let source = match self.translator.detect(input).await {
            Ok(code) => code,
            Err(e) => {
                warn!("Error detecting language: {}, assuming English", e);
                FALLBACK_SOURCE.to_string()
            }
        };
        debug!("Detected source language: {}", source);

        // Translate to the target language
        let translated = match self.translator.translate(input, &source, target.code).await {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Error translating to {}: {}, keeping input text",
                    target.name, e
                );
                input.to_string()
            }
        };

        // Back-translate to English, unless the target already is
        let english = if target.code == "en" {
            translated.clone()
        } else {
            match self.translator.translate(&translated, target.code, "en").await {
                Ok(text) => text,
                Err(e) => {
                    warn!(
                        "Error translating to English: {}, keeping {} text",
                        e, target.name
                    );
                    translated.clone()
                }
            }
        };

        // Sentiment over the English text
        let sentiment = self.analyzer.polarity(&english);

        ConversationTurn::new(source, target.code, input, translated, english, sentiment)
    }

    /// Classify a turn's compound score
    pub fn classify(&self, turn: &ConversationTurn) -> Sentiment {
        Sentiment::from_compound(turn.sentiment)
    }
}
