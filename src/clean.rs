//! Text preprocessing toggles.
//!
//! Each toggle is independent; they are applied in a fixed order
//! (punctuation, whitespace, digits, lowercase), each mutating the text
//! the previous one produced. With nothing selected, cleaning is a
//! no-op and returns the input unchanged.

use crate::split::is_terminal;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

/// Cleaning configuration.
///
/// Mirrors the operator-facing checkboxes: every field defaults to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCleaner {
    /// Remove all punctuation except the terminal-sentence set, so the
    /// cleaned text can still be split into sentences.
    pub strip_punctuation: bool,
    /// Remove separating whitespace entirely, concatenating the
    /// whitespace-delimited tokens.
    pub collapse_whitespace: bool,
    /// Remove digit runs.
    pub strip_digits: bool,
    /// Lowercase Latin text.
    pub lowercase: bool,
}

impl TextCleaner {
    /// Create a cleaner with every toggle off.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable punctuation stripping.
    #[must_use]
    pub fn strip_punctuation(mut self) -> Self {
        self.strip_punctuation = true;
        self
    }

    /// Enable whitespace removal.
    #[must_use]
    pub fn collapse_whitespace(mut self) -> Self {
        self.collapse_whitespace = true;
        self
    }

    /// Enable digit removal.
    #[must_use]
    pub fn strip_digits(mut self) -> Self {
        self.strip_digits = true;
        self
    }

    /// Enable lowercasing.
    #[must_use]
    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    /// Returns true when no toggle is selected.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the selected toggles to `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();

        if self.strip_punctuation {
            out = out
                .chars()
                .filter(|&c| {
                    c.is_alphanumeric() || c == '_' || c.is_whitespace() || is_terminal(c)
                })
                .collect();
        }

        if self.collapse_whitespace {
            out = out.chars().filter(|c| !c.is_whitespace()).collect();
        }

        if self.strip_digits {
            out = DIGIT_RUNS.replace_all(&out, "").into_owned();
        }

        if self.lowercase {
            out = out.to_lowercase();
        }

        out
    }
}
