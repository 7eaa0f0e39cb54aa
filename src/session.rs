//! Session Log
//!
//! Append-only in-memory record of conversation turns, reprinted as a
//! bordered table after every turn. Lives for the process lifetime and
//! is never persisted.

use serde::Serialize;

/// Column headers, in render order
const HEADERS: &[&str] = &[
    "Timestamp",
    "From",
    "To",
    "Input",
    "Translated",
    "English",
    "Sentiment",
];

/// Width of the fixed (non-wrapping) columns
const TIMESTAMP_WIDTH: usize = 19;
const LANG_WIDTH: usize = 4;
const SCORE_WIDTH: usize = 9;

/// Narrowest a text column is allowed to get
const MIN_TEXT_WIDTH: usize = 10;

/// One completed turn of the conversation
#[derive(Debug, Clone, Serialize)]
pub struct ConversationTurn {
    pub timestamp: String,
    pub source_lang: String,
    pub target_lang: String,
    pub input_text: String,
    pub translated_text: String,
    pub english_text: String,
    pub sentiment: f32,
}

impl ConversationTurn {
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        input_text: impl Into<String>,
        translated_text: impl Into<String>,
        english_text: impl Into<String>,
        sentiment: f32,
    ) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            input_text: input_text.into(),
            translated_text: translated_text.into(),
            english_text: english_text.into(),
            sentiment,
        }
    }
}

/// Append-only ordered sequence of turns
#[derive(Debug)]
pub struct SessionLog {
    turns: Vec<ConversationTurn>,
    wrap_width: usize,
}

impl SessionLog {
    pub fn new(wrap_width: usize) -> Self {
        Self {
            turns: Vec::new(),
            wrap_width: wrap_width.max(MIN_TEXT_WIDTH * 3),
        }
    }

    pub fn push(&mut self, turn: ConversationTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the whole history as a bordered table
    pub fn render_table(&self) -> String {
        let text_width = (self.wrap_width / 3).max(MIN_TEXT_WIDTH);
        let widths = [
            TIMESTAMP_WIDTH,
            LANG_WIDTH,
            LANG_WIDTH,
            text_width,
            text_width,
            text_width,
            SCORE_WIDTH,
        ];

        let mut out = String::new();
        let rule = rule_line(&widths);

        out.push_str(&rule);
        out.push_str(&render_row(
            &HEADERS.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
            &widths,
        ));
        out.push_str(&rule);

        for turn in &self.turns {
            let cells = vec![
                turn.timestamp.clone(),
                turn.source_lang.clone(),
                turn.target_lang.clone(),
                turn.input_text.clone(),
                turn.translated_text.clone(),
                turn.english_text.clone(),
                format!("{:+.2}", turn.sentiment),
            ];
            out.push_str(&render_row(&cells, &widths));
        }
        out.push_str(&rule);

        out
    }
}

/// Wrap text to a width, breaking on whitespace where possible
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        // Hard-split words longer than a full line
        if word_len > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width) {
                lines.push(chunk.iter().collect());
            }
            continue;
        }

        let needed = if current_len == 0 { word_len } else { current_len + 1 + word_len };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
            current_len = word_len;
        } else {
            if current_len > 0 {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn rule_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

/// Render one logical row, wrapping every cell and padding to height
fn render_row(cells: &[String], widths: &[usize]) -> String {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| wrap_text(cell, *w))
        .collect();
    let height = wrapped.iter().map(|c| c.len()).max().unwrap_or(1);

    let mut out = String::new();
    for line_idx in 0..height {
        out.push('|');
        for (col, w) in wrapped.iter().zip(widths) {
            let content = col.get(line_idx).map(|s| s.as_str()).unwrap_or("");
            let pad = w.saturating_sub(content.chars().count());
            out.push(' ');
            out.push_str(content);
            out.push_str(&" ".repeat(pad));
            out.push_str(" |");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_turn(input: &str) -> ConversationTurn {
        ConversationTurn::new("en", "hi", input, "नमस्ते", "hello", 0.42)
    }

    #[test]
    fn test_log_is_append_only_and_ordered() {
        let mut log = SessionLog::new(80);
        assert!(log.is_empty());

        log.push(sample_turn("first"));
        log.push(sample_turn("second"));
        log.push(sample_turn("third"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.turns()[0].input_text, "first");
        assert_eq!(log.turns()[2].input_text, "third");
    }

    #[test]
    fn test_render_table_contains_turn_data() {
        let mut log = SessionLog::new(80);
        log.push(sample_turn("good morning"));

        let table = log.render_table();
        assert!(table.contains("Timestamp"));
        assert!(table.contains("good morning"));
        assert!(table.contains("नमस्ते"));
        assert!(table.contains("+0.42"));
    }

    #[test]
    fn test_wrap_text_on_whitespace() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_text_hard_splits_long_words() {
        let lines = wrap_text("antidisestablishmentarianism", 10);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        // Devanagari is multi-byte; wrapping must not split inside a line
        let lines = wrap_text("नमस्ते दुनिया कैसे हैं", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
    }
}
