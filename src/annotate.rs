//! Annotation record shapes and the two per-mode stores.
//!
//! Word mode keeps one entry per token key `(sentence index, token
//! position)`; sentence mode keeps exactly one classification per
//! sentence index. The stores are independent: switching the active
//! mode never clears the inactive store, both persist for the life of
//! the session.

use crate::label::UNLABELED;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which annotation surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationMode {
    /// One label selector per token.
    Word,
    /// One category selector per sentence.
    Sentence,
}

/// A word-level annotation entry.
///
/// The label is the [`UNLABELED`] sentinel until a category is
/// assigned. Entries written under a since-replaced label set keep
/// their old strings; nothing migrates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// 0-based sentence index within the current split.
    pub sentence_index: usize,
    /// 0-based token position within the sentence's cached tokenization.
    pub position: usize,
    /// Token surface form.
    pub token: String,
    /// Assigned category, or the sentinel.
    pub label: String,
}

impl WordEntry {
    /// True once a real category has been assigned.
    #[must_use]
    pub fn is_labeled(&self) -> bool {
        self.label != UNLABELED
    }
}

/// A sentence-level classification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceEntry {
    /// 0-based sentence index within the current split.
    pub sentence_index: usize,
    /// Sentence text at classification time.
    pub text: String,
    /// Assigned category; always a label-set member at write time.
    pub category: String,
}

/// Word-mode store: at most one entry per token key.
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    entries: BTreeMap<(usize, usize), WordEntry>,
}

impl WordStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an unlabeled entry for the key unless one already exists.
    /// An existing entry (and its label) is left untouched.
    pub fn ensure(&mut self, sentence_index: usize, position: usize, token: &str) {
        self.entries
            .entry((sentence_index, position))
            .or_insert_with(|| WordEntry {
                sentence_index,
                position,
                token: token.to_string(),
                label: UNLABELED.to_string(),
            });
    }

    /// Overwrite the label for an existing key. Returns false if the
    /// key has never been materialized.
    pub fn set_label(&mut self, sentence_index: usize, position: usize, label: &str) -> bool {
        match self.entries.get_mut(&(sentence_index, position)) {
            Some(entry) => {
                entry.label = label.to_string();
                true
            }
            None => false,
        }
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, sentence_index: usize, position: usize) -> Option<&WordEntry> {
        self.entries.get(&(sentence_index, position))
    }

    /// Entries in (sentence, position) order.
    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.values()
    }

    /// Number of materialized entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been materialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries carrying a real category.
    #[must_use]
    pub fn labeled_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_labeled()).count()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Sentence-mode store: exactly one classification per sentence index.
#[derive(Debug, Clone, Default)]
pub struct SentenceStore {
    entries: BTreeMap<usize, SentenceEntry>,
}

impl SentenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a default classification for the sentence unless one
    /// already exists.
    pub fn ensure(&mut self, sentence_index: usize, text: &str, default_category: &str) {
        self.entries
            .entry(sentence_index)
            .or_insert_with(|| SentenceEntry {
                sentence_index,
                text: text.to_string(),
                category: default_category.to_string(),
            });
    }

    /// Replace the classification for a sentence index.
    pub fn set_category(&mut self, sentence_index: usize, category: &str) -> bool {
        match self.entries.get_mut(&sentence_index) {
            Some(entry) => {
                entry.category = category.to_string();
                true
            }
            None => false,
        }
    }

    /// Look up a classification by sentence index.
    #[must_use]
    pub fn get(&self, sentence_index: usize) -> Option<&SentenceEntry> {
        self.entries.get(&sentence_index)
    }

    /// Entries in sentence order.
    pub fn iter(&self) -> impl Iterator<Item = &SentenceEntry> {
        self.entries.values()
    }

    /// Number of classified sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no sentence has been classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
