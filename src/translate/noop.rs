//! Pass-through translator
//!
//! Keeps the assistant usable with no network: text passes through
//! untranslated and detection falls back to script inspection.

use crate::error::VaartaResult;
use crate::language;

#[derive(Debug, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl super::Translator for NoopTranslator {
    async fn detect(&self, text: &str) -> VaartaResult<String> {
        Ok(language::guess_code_from_script(text).to_string())
    }

    async fn translate(&self, text: &str, _from: &str, _to: &str) -> VaartaResult<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::Translator;

    #[tokio::test]
    async fn test_noop_passes_text_through() {
        let translator = NoopTranslator::new();
        let result = translator.translate("hello", "en", "hi").await.unwrap();
        assert_eq!(result, "hello");
    }

    #[tokio::test]
    async fn test_noop_detects_by_script() {
        let translator = NoopTranslator::new();
        assert_eq!(translator.detect("hello there").await.unwrap(), "en");
        assert_eq!(translator.detect("नमस्ते").await.unwrap(), "hi");
    }
}
