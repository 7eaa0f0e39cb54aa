//! Supported-Language Table
//!
//! Static mapping of Indian language names to ISO-like codes, fixed at
//! startup, plus Unicode-script inspection used for offline source
//! language guessing.

/// One entry in the supported-language table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: &'static str,
    pub code: &'static str,
}

/// The fixed table: 24 Indian languages plus English
pub const SUPPORTED_LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { name: "hindi", code: "hi" },
    LanguageEntry { name: "telugu", code: "te" },
    LanguageEntry { name: "tamil", code: "ta" },
    LanguageEntry { name: "kannada", code: "kn" },
    LanguageEntry { name: "bengali", code: "bn" },
    LanguageEntry { name: "gujarati", code: "gu" },
    LanguageEntry { name: "marathi", code: "mr" },
    LanguageEntry { name: "punjabi", code: "pa" },
    LanguageEntry { name: "malayalam", code: "ml" },
    LanguageEntry { name: "urdu", code: "ur" },
    LanguageEntry { name: "assamese", code: "as" },
    LanguageEntry { name: "oriya", code: "or" },
    LanguageEntry { name: "maithili", code: "mai" },
    LanguageEntry { name: "sanskrit", code: "sa" },
    LanguageEntry { name: "konkani", code: "kok" },
    LanguageEntry { name: "sindhi", code: "sd" },
    LanguageEntry { name: "nepali", code: "ne" },
    LanguageEntry { name: "bhili", code: "bhi" },
    LanguageEntry { name: "santali", code: "sat" },
    LanguageEntry { name: "kashmiri", code: "ks" },
    LanguageEntry { name: "dogri", code: "doi" },
    LanguageEntry { name: "tulu", code: "tcy" },
    LanguageEntry { name: "bodo", code: "brx" },
    LanguageEntry { name: "kanauji", code: "bjj" },
    LanguageEntry { name: "english", code: "en" },
];

/// Look up a language by name or code, case-insensitive
pub fn lookup(name_or_code: &str) -> Option<&'static LanguageEntry> {
    let needle = name_or_code.trim().to_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|entry| entry.name == needle || entry.code == needle)
}

/// Check whether a code is in the table
pub fn is_supported_code(code: &str) -> bool {
    let code = code.trim().to_lowercase();
    SUPPORTED_LANGUAGES.iter().any(|entry| entry.code == code)
}

/// All language names, in table order (for prompts)
pub fn names() -> Vec<&'static str> {
    SUPPORTED_LANGUAGES.iter().map(|entry| entry.name).collect()
}

/// Comma-joined name list used in spoken and printed prompts
pub fn names_joined() -> String {
    names().join(", ")
}

/// Writing systems distinguishable by Unicode block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Odia,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Arabic,
    OlChiki,
}

impl Script {
    /// Unicode range of the script's primary block
    fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0041, 0x007A),
            Self::Devanagari => (0x0900, 0x097F),
            Self::Bengali => (0x0980, 0x09FF),
            Self::Gurmukhi => (0x0A00, 0x0A7F),
            Self::Gujarati => (0x0A80, 0x0AFF),
            Self::Odia => (0x0B00, 0x0B7F),
            Self::Tamil => (0x0B80, 0x0BFF),
            Self::Telugu => (0x0C00, 0x0C7F),
            Self::Kannada => (0x0C80, 0x0CFF),
            Self::Malayalam => (0x0D00, 0x0D7F),
            Self::Arabic => (0x0600, 0x06FF),
            Self::OlChiki => (0x1C50, 0x1C7F),
        }
    }

    fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    const ALL: &'static [Script] = &[
        Self::Devanagari,
        Self::Bengali,
        Self::Gurmukhi,
        Self::Gujarati,
        Self::Odia,
        Self::Tamil,
        Self::Telugu,
        Self::Kannada,
        Self::Malayalam,
        Self::Arabic,
        Self::OlChiki,
        Self::Latin,
    ];

    /// Detect the dominant script of a text, by character count
    pub fn detect(text: &str) -> Option<Self> {
        let mut counts = std::collections::HashMap::new();

        for c in text.chars() {
            for script in Self::ALL {
                if script.contains_char(c) {
                    *counts.entry(*script).or_insert(0usize) += 1;
                    break;
                }
            }
        }

        counts.into_iter().max_by_key(|(_, n)| *n).map(|(s, _)| s)
    }

    /// Most likely language code for text in this script
    ///
    /// Several languages share Devanagari and Arabic script; the most
    /// widely spoken one wins. Good enough for the offline fallback.
    pub fn default_language_code(&self) -> &'static str {
        match self {
            Self::Latin => "en",
            Self::Devanagari => "hi",
            Self::Bengali => "bn",
            Self::Gurmukhi => "pa",
            Self::Gujarati => "gu",
            Self::Odia => "or",
            Self::Tamil => "ta",
            Self::Telugu => "te",
            Self::Kannada => "kn",
            Self::Malayalam => "ml",
            Self::Arabic => "ur",
            Self::OlChiki => "sat",
        }
    }
}

/// Guess a supported language code from the text's dominant script
pub fn guess_code_from_script(text: &str) -> &'static str {
    Script::detect(text)
        .map(|s| s.default_language_code())
        .unwrap_or("en")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        // 24 Indian languages + English
        assert_eq!(SUPPORTED_LANGUAGES.len(), 25);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup("hindi").unwrap().code, "hi");
        assert_eq!(lookup("Tamil").unwrap().code, "ta");
        assert_eq!(lookup("  KANNADA ").unwrap().code, "kn");
        assert!(lookup("klingon").is_none());
    }

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(lookup("bn").unwrap().name, "bengali");
        assert_eq!(lookup("tcy").unwrap().name, "tulu");
        assert!(is_supported_code("mai"));
        assert!(!is_supported_code("fr"));
    }

    #[test]
    fn test_names_joined() {
        let joined = names_joined();
        assert!(joined.starts_with("hindi"));
        assert!(joined.ends_with("english"));
        assert!(joined.contains("santali"));
    }

    #[test]
    fn test_script_detect() {
        assert_eq!(Script::detect("Hello world"), Some(Script::Latin));
        assert_eq!(Script::detect("नमस्ते दुनिया"), Some(Script::Devanagari));
        assert_eq!(Script::detect("வணக்கம்"), Some(Script::Tamil));
        assert_eq!(Script::detect("নমস্কার"), Some(Script::Bengali));
        assert_eq!(Script::detect("123 !!"), None);
    }

    #[test]
    fn test_guess_code_from_script() {
        assert_eq!(guess_code_from_script("good morning"), "en");
        assert_eq!(guess_code_from_script("सुप्रभात"), "hi");
        assert_eq!(guess_code_from_script("సుప్రభాతం"), "te");
        // Mixed text: dominant script wins
        assert_eq!(guess_code_from_script("ok ठीक है बिल्कुल"), "hi");
    }
}
