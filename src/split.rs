//! Sentence splitting on terminal punctuation.
//!
//! The splitter cuts immediately after each terminal mark, keeping the
//! mark attached to the sentence it closes. A trailing remainder with
//! no terminal mark becomes its own final sentence. Empty and
//! whitespace-only segments are dropped, so consecutive marks do not
//! produce phantom sentences.

use serde::{Deserialize, Serialize};

/// Terminal punctuation marks that close a sentence.
///
/// Chinese full-width and Latin half-width period/exclamation/question.
pub const TERMINALS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// Returns true if `c` closes a sentence.
#[must_use]
pub fn is_terminal(c: char) -> bool {
    TERMINALS.contains(&c)
}

/// A sentence with its position in the current split.
///
/// The index is 0-based and stable only until the working text is
/// replaced and re-split; a new split produces a fresh sequence with no
/// relation to the prior one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// 0-based position within the current split.
    pub index: usize,
    /// Sentence text, trimmed, with its terminal mark attached.
    pub text: String,
}

impl Sentence {
    /// Create a sentence record.
    #[must_use]
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// 1-based id used in exported tables.
    #[must_use]
    pub fn display_id(&self) -> usize {
        self.index + 1
    }
}

/// Split `text` into trimmed, non-empty sentence strings.
///
/// Order matches document order. The operation drops nothing but
/// boundary whitespace: joining the result reconstitutes the input up
/// to whitespace differences at sentence boundaries.
///
/// # Example
///
/// ```
/// use lexikit::split::split_sentences;
///
/// let parts = split_sentences("AI是一种技术。它很有用！");
/// assert_eq!(parts, vec!["AI是一种技术。", "它很有用！"]);
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if is_terminal(c) {
            push_nonempty(&mut sentences, &current);
            current.clear();
        }
    }
    // Trailing remainder without a terminal mark.
    push_nonempty(&mut sentences, &current);

    sentences
}

/// Split `text` and wrap each part with its 0-based index.
#[must_use]
pub fn split_indexed(text: &str) -> Vec<Sentence> {
    split_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(i, s)| Sentence::new(i, s))
        .collect()
}

fn push_nonempty(out: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mixed_terminal_marks() {
        let parts = split_sentences("AI是一种技术。它很有用！");
        assert_eq!(parts, vec!["AI是一种技术。", "它很有用！"]);
    }

    #[test]
    fn no_terminal_yields_single_sentence() {
        let parts = split_sentences("没有标点的一句话");
        assert_eq!(parts, vec!["没有标点的一句话"]);
    }

    #[test]
    fn consecutive_marks_collapse() {
        let parts = split_sentences("真的吗？！好。");
        assert_eq!(parts, vec!["真的吗？", "！", "好。"]);
    }

    #[test]
    fn whitespace_only_segments_dropped() {
        let parts = split_sentences("一句。   \n 二句。  ");
        assert_eq!(parts, vec!["一句。", "二句。"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn idempotent_on_single_sentence() {
        let parts = split_sentences("它很有用！");
        assert_eq!(parts.len(), 1);
        let again = split_sentences(&parts[0]);
        assert_eq!(again, parts);
    }

    #[test]
    fn indexed_split_is_zero_based() {
        let sentences = split_indexed("一。二。三。");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[2].index, 2);
        assert_eq!(sentences[1].display_id(), 2);
    }

    #[test]
    fn reconstitutes_up_to_boundary_whitespace() {
        let text = "第一句。 Second one! 最后没有结尾";
        let parts = split_sentences(text);
        let rejoined: String = parts.concat();
        let squashed = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(squashed(&rejoined), squashed(text));
    }
}
