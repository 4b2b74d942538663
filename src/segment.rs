//! Tokenization over mixed Chinese/Latin text.
//!
//! The crate does not implement word segmentation itself. Latin-script
//! runs are split on a word pattern; Han runs are handed to a
//! dictionary-based segmenter behind the [`Segmenter`] trait, with
//! document order preserved across the two paths. The default
//! implementation delegates to jieba.

use crate::lang::{script_of, Script};
use jieba_rs::Jieba;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LATIN_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*|\d+").expect("valid word pattern"));

static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

/// A token with its position within one tokenization pass.
///
/// Tokens have no identity beyond that position; the session caches the
/// pass so positions stay stable across repeated reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 0-based position within the tokenized sentence.
    pub position: usize,
    /// Surface form.
    pub text: String,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Word segmentation seam.
///
/// Any dictionary-based CJK segmenter satisfies this contract; the rest
/// of the crate never assumes a particular backend.
pub trait Segmenter: Send + Sync {
    /// Split `text` into a sequence of word strings, document order.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Default segmenter: jieba for Han runs, word pattern for the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct JiebaSegmenter;

impl JiebaSegmenter {
    /// Create the default segmenter. The underlying dictionary is
    /// process-wide and loaded once.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        for (script, run) in script_runs(text) {
            match script {
                Script::Han => {
                    words.extend(JIEBA.cut(&run, false).into_iter().map(str::to_string));
                }
                _ => {
                    words.extend(
                        LATIN_WORDS
                            .find_iter(&run)
                            .map(|m| m.as_str().to_string()),
                    );
                }
            }
        }
        words
    }
}

/// Tokenize `text` with `segmenter`, assigning 0-based positions and
/// dropping blank tokens.
#[must_use]
pub fn tokenize(segmenter: &dyn Segmenter, text: &str) -> Vec<Token> {
    segmenter
        .segment(text)
        .into_iter()
        .filter(|w| !w.trim().is_empty())
        .enumerate()
        .map(|(i, w)| Token::new(i, w))
        .collect()
}

/// Group consecutive characters into Han and non-Han runs.
///
/// Boundaries fall exactly where the Han classification flips, so the
/// concatenation of all runs is the input text.
fn script_runs(text: &str) -> Vec<(Script, String)> {
    let mut runs: Vec<(Script, String)> = Vec::new();
    for c in text.chars() {
        let class = match script_of(c) {
            Script::Han => Script::Han,
            _ => Script::Other,
        };
        match runs.last_mut() {
            Some((last, run)) if *last == class => run.push(c),
            _ => runs.push((class, c.to_string())),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-split segmenter for tests that must not depend on the
    /// jieba dictionary.
    struct WhitespaceSegmenter;

    impl Segmenter for WhitespaceSegmenter {
        fn segment(&self, text: &str) -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        }
    }

    #[test]
    fn latin_runs_kept_as_words() {
        let seg = JiebaSegmenter::new();
        let words = seg.segment("machine learning rocks");
        assert_eq!(words, vec!["machine", "learning", "rocks"]);
    }

    #[test]
    fn apostrophes_stay_inside_words() {
        let seg = JiebaSegmenter::new();
        assert_eq!(seg.segment("it's fine"), vec!["it's", "fine"]);
    }

    #[test]
    fn digits_form_their_own_tokens() {
        let seg = JiebaSegmenter::new();
        assert_eq!(seg.segment("v2 beta 10"), vec!["v", "2", "beta", "10"]);
    }

    #[test]
    fn punctuation_is_not_a_token() {
        let seg = JiebaSegmenter::new();
        assert_eq!(seg.segment("hello, world!"), vec!["hello", "world"]);
    }

    #[test]
    fn mixed_text_preserves_document_order() {
        let seg = JiebaSegmenter::new();
        let words = seg.segment("AI技术 rocks");
        assert_eq!(words.first().map(String::as_str), Some("AI"));
        assert_eq!(words.last().map(String::as_str), Some("rocks"));
        // Han material sits between the Latin words.
        assert!(words[1..words.len() - 1].iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn tokenize_assigns_sequential_positions() {
        let tokens = tokenize(&WhitespaceSegmenter, "a b c");
        assert_eq!(tokens.len(), 3);
        for (i, t) in tokens.iter().enumerate() {
            assert_eq!(t.position, i);
        }
    }

    #[test]
    fn tokenize_drops_blank_tokens() {
        struct Blanky;
        impl Segmenter for Blanky {
            fn segment(&self, _: &str) -> Vec<String> {
                vec!["a".into(), "  ".into(), String::new(), "b".into()]
            }
        }
        let tokens = tokenize(&Blanky, "ignored");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], Token::new(1, "b"));
    }

    #[test]
    fn script_runs_cover_input() {
        let text = "AI是一种技术。它rocks！";
        let runs = script_runs(text);
        let rejoined: String = runs.into_iter().map(|(_, r)| r).collect();
        assert_eq!(rejoined, text);
    }
}
