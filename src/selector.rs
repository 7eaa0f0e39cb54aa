//! Target-Language Selector
//!
//! Resolves a spoken answer against the supported-language table.
//! Exact name or code matches win; otherwise the closest name above a
//! similarity cutoff is taken, which absorbs one-letter recognition
//! slips ("bengoli" resolves to bengali).

use crate::language::{self, LanguageEntry};
use strsim::normalized_levenshtein;
use tracing::debug;

/// Minimum similarity for a fuzzy language-name match
const FUZZY_CUTOFF: f64 = 0.75;

#[derive(Debug, Default)]
pub struct LanguageSelector;

impl LanguageSelector {
    pub fn new() -> Self {
        Self
    }

    /// Prompt text listing every supported language
    pub fn prompt_text(&self) -> String {
        format!(
            "Please choose a target language from the following list:\n{}",
            language::names_joined()
        )
    }

    /// Re-prompt text for an unsupported answer
    pub fn invalid_text(&self, heard: &str) -> String {
        format!(
            "Language '{}' not supported. Please choose from:\n{}",
            heard,
            language::names_joined()
        )
    }

    /// Resolve a spoken answer to a table entry
    pub fn resolve(&self, heard: &str) -> Option<&'static LanguageEntry> {
        let cleaned = heard
            .trim()
            .trim_matches(|c: char| c.is_ascii_punctuation())
            .to_lowercase();
        if cleaned.is_empty() {
            return None;
        }

        // Exact name or code match first
        if let Some(entry) = language::lookup(&cleaned) {
            return Some(entry);
        }

        // Fuzzy match over names
        let mut best: Option<(&'static LanguageEntry, f64)> = None;
        for entry in language::SUPPORTED_LANGUAGES {
            let score = normalized_levenshtein(&cleaned, entry.name);
            if score >= FUZZY_CUTOFF && best.map_or(true, |(_, s)| score > s) {
                best = Some((entry, score));
            }
        }

        if let Some((entry, score)) = best {
            debug!("Fuzzy language match: '{}' -> {} ({:.2})", heard, entry.name, score);
            return Some(entry);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_name_and_code() {
        let selector = LanguageSelector::new();
        assert_eq!(selector.resolve("hindi").unwrap().code, "hi");
        assert_eq!(selector.resolve("Tamil").unwrap().code, "ta");
        assert_eq!(selector.resolve("kn").unwrap().name, "kannada");
    }

    #[test]
    fn test_fuzzy_resolution() {
        let selector = LanguageSelector::new();
        assert_eq!(selector.resolve("bengoli").unwrap().name, "bengali");
        assert_eq!(selector.resolve("hindhi").unwrap().name, "hindi");
        assert_eq!(selector.resolve("malayalm").unwrap().name, "malayalam");
    }

    #[test]
    fn test_no_cross_match_between_similar_names() {
        let selector = LanguageSelector::new();
        // telugu and tulu are distinct entries; each resolves to itself
        assert_eq!(selector.resolve("telugu").unwrap().code, "te");
        assert_eq!(selector.resolve("tulu").unwrap().code, "tcy");
    }

    #[test]
    fn test_unsupported_rejected() {
        let selector = LanguageSelector::new();
        assert!(selector.resolve("french").is_none());
        assert!(selector.resolve("klingon").is_none());
        assert!(selector.resolve("").is_none());
        assert!(selector.resolve("  ?! ").is_none());
    }

    #[test]
    fn test_punctuation_stripped() {
        let selector = LanguageSelector::new();
        assert_eq!(selector.resolve("hindi.").unwrap().code, "hi");
        assert_eq!(selector.resolve("'tamil'").unwrap().code, "ta");
    }
}
