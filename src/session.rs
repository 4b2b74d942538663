//! Session state and the annotation controller.
//!
//! Every piece of state that outlives a single interaction lives here:
//! the working text, the current sentence split, the per-sentence token
//! cache, the configured label set, and both annotation stores. A
//! `Session` is created empty, passed `&mut` to every operation, and
//! cleared only by [`Session::reset`]. Sessions share nothing with each
//! other.
//!
//! Token identity is made stable by caching: each sentence is tokenized
//! once, on first use, and every later read of that sentence reuses the
//! cached pass. Keys of the form (sentence index, token position)
//! therefore cannot drift between reads. Replacing the split discards
//! the cache and both stores wholesale.

use crate::annotate::{AnnotationMode, SentenceEntry, SentenceStore, WordEntry, WordStore};
use crate::clean::TextCleaner;
use crate::label::{LabelSet, UNLABELED};
use crate::segment::{tokenize, JiebaSegmenter, Segmenter, Token};
use crate::split::{split_indexed, Sentence};
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Process-lifetime annotation session.
pub struct Session {
    segmenter: Box<dyn Segmenter>,
    working_text: String,
    sentences: Vec<Sentence>,
    token_cache: BTreeMap<usize, Vec<Token>>,
    label_set: Option<LabelSet>,
    mode: AnnotationMode,
    word_store: WordStore,
    sentence_store: SentenceStore,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("working_text_len", &self.working_text.len())
            .field("sentences", &self.sentences.len())
            .field("label_set", &self.label_set)
            .field("mode", &self.mode)
            .field("word_entries", &self.word_store.len())
            .field("sentence_entries", &self.sentence_store.len())
            .finish()
    }
}

impl Session {
    /// Create an empty session with the default segmenter.
    #[must_use]
    pub fn new() -> Self {
        Self::with_segmenter(Box::new(JiebaSegmenter::new()))
    }

    /// Create an empty session with a caller-supplied segmenter.
    #[must_use]
    pub fn with_segmenter(segmenter: Box<dyn Segmenter>) -> Self {
        Self {
            segmenter,
            working_text: String::new(),
            sentences: Vec::new(),
            token_cache: BTreeMap::new(),
            label_set: None,
            mode: AnnotationMode::Word,
            word_store: WordStore::new(),
            sentence_store: SentenceStore::new(),
        }
    }

    /// Clear every field back to the first-visit state. The label set
    /// is dropped too.
    pub fn reset(&mut self) {
        self.working_text.clear();
        self.sentences.clear();
        self.token_cache.clear();
        self.label_set = None;
        self.mode = AnnotationMode::Word;
        self.word_store.clear();
        self.sentence_store.clear();
    }

    // ------------------------------------------------------------------
    // Working text and preprocessing
    // ------------------------------------------------------------------

    /// Replace the working text. Does not re-split; call
    /// [`Session::apply_split`] when ready.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::input("text must not be empty"));
        }
        self.working_text = text;
        Ok(())
    }

    /// Current working text.
    #[must_use]
    pub fn working_text(&self) -> &str {
        &self.working_text
    }

    /// Run the cleaner over the working text and store the result as
    /// the new working text. The sentence split is untouched until
    /// [`Session::apply_split`].
    pub fn clean_text(&mut self, cleaner: &TextCleaner) -> Result<&str> {
        if self.working_text.trim().is_empty() {
            return Err(Error::input("no text to clean"));
        }
        self.working_text = cleaner.apply(&self.working_text);
        Ok(&self.working_text)
    }

    /// Split the working text into sentences, replacing the previous
    /// split. The token cache and both annotation stores are cleared:
    /// indices from the old split have no meaning against the new one.
    pub fn apply_split(&mut self) -> Result<&[Sentence]> {
        if self.working_text.trim().is_empty() {
            return Err(Error::input("no text to split"));
        }
        self.sentences = split_indexed(&self.working_text);
        self.token_cache.clear();
        self.word_store.clear();
        self.sentence_store.clear();
        Ok(&self.sentences)
    }

    /// Sentences of the current split.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    // ------------------------------------------------------------------
    // Label-set configuration and mode selection
    // ------------------------------------------------------------------

    /// Configure (or replace) the label set. Stored entries are not
    /// re-validated: labels written under the old set stay as they are.
    pub fn set_labels(&mut self, labels: LabelSet) {
        self.label_set = Some(labels);
    }

    /// Parse and configure a comma-separated label list.
    pub fn set_labels_from(&mut self, input: &str) -> Result<()> {
        self.label_set = Some(LabelSet::parse(input)?);
        Ok(())
    }

    /// Currently configured label set, if any.
    #[must_use]
    pub fn label_set(&self) -> Option<&LabelSet> {
        self.label_set.as_ref()
    }

    /// Active annotation mode.
    #[must_use]
    pub fn mode(&self) -> AnnotationMode {
        self.mode
    }

    /// Switch the active mode. The inactive mode's store persists.
    pub fn set_mode(&mut self, mode: AnnotationMode) {
        self.mode = mode;
    }

    // ------------------------------------------------------------------
    // Word mode
    // ------------------------------------------------------------------

    /// Cached tokens for one sentence, tokenizing on first use.
    pub fn tokens_for(&mut self, sentence_index: usize) -> Result<&[Token]> {
        let sentence = self
            .sentences
            .get(sentence_index)
            .ok_or_else(|| Error::input(format!("no sentence at index {sentence_index}")))?;
        let tokens = self
            .token_cache
            .entry(sentence_index)
            .or_insert_with(|| tokenize(self.segmenter.as_ref(), &sentence.text));
        Ok(tokens)
    }

    /// Render word mode: materialize an unlabeled entry for every token
    /// of every sentence that does not have one yet, and return the
    /// entries in key order. Prior selections are preserved.
    pub fn word_rows(&mut self) -> Result<Vec<WordEntry>> {
        self.require_labels()?;
        self.require_sentences()?;
        for index in 0..self.sentences.len() {
            self.tokens_for(index)?;
            let tokens = &self.token_cache[&index];
            for token in tokens {
                self.word_store.ensure(index, token.position, &token.text);
            }
        }
        Ok(self.word_store.iter().cloned().collect())
    }

    /// Assign a label to one token key. The label must be the sentinel
    /// or a member of the current label set; anything else is rejected.
    pub fn set_word_label(
        &mut self,
        sentence_index: usize,
        position: usize,
        label: &str,
    ) -> Result<()> {
        let labels = self.require_labels()?;
        if label != UNLABELED && !labels.contains(label) {
            return Err(Error::input(format!(
                "label '{label}' is not in the current label set"
            )));
        }
        let label = label.to_string();
        let tokens = self.tokens_for(sentence_index)?;
        let token = tokens.get(position).cloned().ok_or_else(|| {
            Error::input(format!(
                "sentence {sentence_index} has no token at position {position}"
            ))
        })?;
        self.word_store.ensure(sentence_index, position, &token.text);
        self.word_store.set_label(sentence_index, position, &label);
        Ok(())
    }

    /// Current label for a token key, if the entry exists.
    #[must_use]
    pub fn word_label(&self, sentence_index: usize, position: usize) -> Option<&str> {
        self.word_store
            .get(sentence_index, position)
            .map(|e| e.label.as_str())
    }

    /// Word-mode store, for export.
    #[must_use]
    pub fn word_store(&self) -> &WordStore {
        &self.word_store
    }

    // ------------------------------------------------------------------
    // Sentence mode
    // ------------------------------------------------------------------

    /// Render sentence mode: materialize a classification for every
    /// sentence that lacks one, defaulting to the first label-set
    /// entry, and return the entries in sentence order.
    pub fn sentence_rows(&mut self) -> Result<Vec<SentenceEntry>> {
        let default = self.require_labels()?.first().to_string();
        self.require_sentences()?;
        for sentence in &self.sentences {
            self.sentence_store
                .ensure(sentence.index, &sentence.text, &default);
        }
        Ok(self.sentence_store.iter().cloned().collect())
    }

    /// Classify one sentence. The category must be a member of the
    /// current label set (sentence mode has no sentinel).
    pub fn set_sentence_category(&mut self, sentence_index: usize, category: &str) -> Result<()> {
        let labels = self.require_labels()?;
        if !labels.contains(category) {
            return Err(Error::input(format!(
                "category '{category}' is not in the current label set"
            )));
        }
        let text = self
            .sentences
            .get(sentence_index)
            .map(|s| s.text.clone())
            .ok_or_else(|| Error::input(format!("no sentence at index {sentence_index}")))?;
        self.sentence_store.ensure(sentence_index, &text, category);
        self.sentence_store.set_category(sentence_index, category);
        Ok(())
    }

    /// Sentence-mode store, for export.
    #[must_use]
    pub fn sentence_store(&self) -> &SentenceStore {
        &self.sentence_store
    }

    // ------------------------------------------------------------------

    fn require_labels(&self) -> Result<&LabelSet> {
        self.label_set
            .as_ref()
            .ok_or_else(|| Error::input("no label set configured"))
    }

    fn require_sentences(&self) -> Result<()> {
        if self.sentences.is_empty() {
            return Err(Error::input("no sentences: set text and apply the split first"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(text: &str, labels: &str) -> Session {
        let mut session = Session::new();
        session.set_text(text).unwrap();
        session.apply_split().unwrap();
        session.set_labels_from(labels).unwrap();
        session
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut session = Session::new();
        assert!(session.set_text("   ").is_err());
        assert!(session.apply_split().is_err());
    }

    #[test]
    fn render_materializes_unlabeled_entries() {
        let mut session = session_with("AI是一种技术。它很有用！", "名词,动词");
        let rows = session.word_rows().unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.label == UNLABELED));
    }

    #[test]
    fn label_survives_re_render() {
        let mut session = session_with("AI是一种技术。它很有用！", "名词,动词");
        session.word_rows().unwrap();
        session.set_word_label(0, 0, "名词").unwrap();
        // Re-render twice; the selection must read back unchanged.
        session.word_rows().unwrap();
        let rows = session.word_rows().unwrap();
        let entry = rows
            .iter()
            .find(|r| r.sentence_index == 0 && r.position == 0)
            .unwrap();
        assert_eq!(entry.label, "名词");
        assert_eq!(session.word_label(0, 0), Some("名词"));
    }

    #[test]
    fn labels_outside_the_set_are_rejected() {
        let mut session = session_with("一句话。", "甲,乙");
        session.word_rows().unwrap();
        assert!(session.set_word_label(0, 0, "丙").is_err());
        assert!(session.set_word_label(0, 0, UNLABELED).is_ok());
    }

    #[test]
    fn stale_labels_survive_label_set_replacement() {
        let mut session = session_with("一句话。", "人名,地名");
        session.word_rows().unwrap();
        session.set_word_label(0, 0, "人名").unwrap();
        // Remove 人名 from the set; the stored entry keeps the stale string.
        session.set_labels_from("地名").unwrap();
        assert_eq!(session.word_label(0, 0), Some("人名"));
        // But new writes of the removed label are rejected.
        assert!(session.set_word_label(0, 1, "人名").is_err());
    }

    #[test]
    fn sentence_mode_defaults_to_first_label() {
        let mut session = session_with("第一句。第二句！", "积极,消极");
        let rows = session.sentence_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.category == "积极"));
        session.set_sentence_category(1, "消极").unwrap();
        assert_eq!(session.sentence_store().get(1).unwrap().category, "消极");
    }

    #[test]
    fn mode_switch_keeps_both_stores() {
        let mut session = session_with("第一句。第二句！", "甲,乙");
        session.word_rows().unwrap();
        session.set_word_label(0, 0, "甲").unwrap();
        session.set_mode(AnnotationMode::Sentence);
        session.sentence_rows().unwrap();
        session.set_sentence_category(0, "乙").unwrap();
        session.set_mode(AnnotationMode::Word);
        assert_eq!(session.word_label(0, 0), Some("甲"));
        assert_eq!(session.sentence_store().get(0).unwrap().category, "乙");
    }

    #[test]
    fn apply_split_invalidates_annotations() {
        let mut session = session_with("旧文本。", "甲");
        session.word_rows().unwrap();
        session.set_word_label(0, 0, "甲").unwrap();
        session.set_text("全新的文本。完全不同！").unwrap();
        session.apply_split().unwrap();
        assert!(session.word_store().is_empty());
        assert!(session.sentence_store().is_empty());
        assert_eq!(session.sentences().len(), 2);
    }

    #[test]
    fn clean_does_not_resplit() {
        let mut session = session_with("版本2.0发布。下一句！", "甲");
        let before = session.sentences().len();
        let cleaner = TextCleaner::new().strip_digits();
        session.clean_text(&cleaner).unwrap();
        assert_eq!(session.sentences().len(), before);
        assert_eq!(session.working_text(), "版本.发布。下一句！");
    }

    #[test]
    fn reset_returns_to_first_visit_state() {
        let mut session = session_with("一句话。", "甲");
        session.word_rows().unwrap();
        session.reset();
        assert!(session.working_text().is_empty());
        assert!(session.sentences().is_empty());
        assert!(session.label_set().is_none());
        assert!(session.word_store().is_empty());
    }

    #[test]
    fn operations_without_labels_fail() {
        let mut session = Session::new();
        session.set_text("一句话。").unwrap();
        session.apply_split().unwrap();
        assert!(session.word_rows().is_err());
        assert!(session.sentence_rows().is_err());
    }
}
