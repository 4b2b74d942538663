//! Word-frequency counting and character statistics.
//!
//! Counting runs over segmenter output with three independent filters
//! (punctuation tokens, stop words, numeric tokens), then keeps the top
//! N entries by descending count. The stop-word list is a built-in set
//! of common Chinese function words plus caller-supplied additions.

use crate::segment::Segmenter;
use crate::{Error, Result};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Common Chinese function words filtered by the stop-word toggle.
pub const STOP_WORDS: &[&str] = &[
    "我", "你", "他", "她", "它", "我们", "你们", "他们", "她们", "它们", "的", "了", "和",
    "在", "是", "不", "也", "有", "对", "到", "说", "看", "很", "都", "这", "那", "什么",
    "就", "人", "因为", "怎么", "一个", "而", "但", "会", "能", "让", "如果", "又", "用",
    "自己", "多", "没", "为", "去", "然后", "这样", "那样", "真的", "所以", "其实", "并",
    "吧", "吗", "呢", "就是", "而且", "或者", "可以", "可能", "像", "要", "比如", "从",
    "更", "这儿", "那儿", "那么", "如此",
];

/// Frequency-counting configuration. Every filter defaults to off.
#[derive(Debug, Clone, Default)]
pub struct FreqOptions {
    /// Drop tokens that begin with a non-word character.
    pub drop_punctuation: bool,
    /// Drop stop words (built-in list plus `custom_stop_words`).
    pub drop_stop_words: bool,
    /// Drop purely numeric tokens.
    pub drop_numbers: bool,
    /// Extra stop words, honored when `drop_stop_words` is set.
    pub custom_stop_words: Vec<String>,
    /// Keep only the N most frequent words. `None` keeps everything.
    pub top_n: Option<usize>,
}

/// One word-frequency row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreqRow {
    /// The counted word.
    pub word: String,
    /// Occurrences after filtering.
    pub count: usize,
}

/// Count word frequencies in `text`.
///
/// Rows come back sorted by descending count, ties broken
/// alphabetically so the output is deterministic.
pub fn count_words(
    segmenter: &dyn Segmenter,
    text: &str,
    options: &FreqOptions,
) -> Result<Vec<FreqRow>> {
    if text.trim().is_empty() {
        return Err(Error::input("no text to count"));
    }

    let stop_words: HashSet<&str> = if options.drop_stop_words {
        STOP_WORDS
            .iter()
            .copied()
            .chain(options.custom_stop_words.iter().map(String::as_str))
            .collect()
    } else {
        HashSet::new()
    };

    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in segmenter.segment(text) {
        if word.trim().is_empty() {
            continue;
        }
        if options.drop_punctuation && !starts_with_word_char(&word) {
            continue;
        }
        if options.drop_stop_words && stop_words.contains(word.as_str()) {
            continue;
        }
        if options.drop_numbers && word.chars().all(char::is_numeric) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut rows: Vec<FreqRow> = counts
        .into_iter()
        .map(|(word, count)| FreqRow { word, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    if let Some(n) = options.top_n {
        rows.truncate(n);
    }
    Ok(rows)
}

fn starts_with_word_char(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// Character-level statistics of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharStats {
    /// Total character count.
    pub chars: usize,
    /// Whitespace-separated word count.
    pub words: usize,
    /// Character count excluding punctuation.
    pub chars_no_punctuation: usize,
}

/// Compute [`CharStats`] for `text`.
#[must_use]
pub fn char_stats(text: &str) -> CharStats {
    CharStats {
        chars: text.chars().count(),
        words: text.split_whitespace().count(),
        chars_no_punctuation: text
            .chars()
            .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace())
            .count(),
    }
}
