//! Text normalization for substring analysis

use regex::Regex;

/// Normalizes raw extracted text: keeps letters, digits, `.`, `,`, and
/// whitespace, collapses whitespace runs to single spaces, lowercases, and
/// trims. All downstream substring checks run on this form.
pub struct TextNormalizer {
    disallowed: Regex,
    whitespace: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let disallowed = Regex::new(r"[^a-zA-Z0-9.,\s]").expect("Invalid character-class regex");
        let whitespace = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self { disallowed, whitespace }
    }

    /// Empty or whitespace-only input yields an empty string; no error is
    /// ever raised. Punctuation is stripped before whitespace collapsing so
    /// the operation is idempotent.
    pub fn normalize(&self, text: &str) -> String {
        let stripped = self.disallowed.replace_all(text, "");
        let collapsed = self.whitespace.replace_all(&stripped, " ");
        collapsed.trim().to_lowercase()
    }
}

/// Whitespace-delimited token count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
