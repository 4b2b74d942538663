//! Property tests over random annotation workloads.

use lexikit::export::{word_stats, word_table, WordScope};
use lexikit::prelude::*;
use proptest::prelude::*;

struct Whitespace;

impl Segmenter for Whitespace {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Ten tokens across two sentences, fixed shape.
fn ready_session() -> Session {
    let mut session = Session::with_segmenter(Box::new(Whitespace));
    session.set_text("w0 w1 w2 w3 w4. u0 u1 u2 u3 u4!").unwrap();
    session.apply_split().unwrap();
    session.set_labels_from("甲,乙,丙").unwrap();
    session.word_rows().unwrap();
    session
}

proptest! {
    /// Whatever sequence of writes happens, the labeled-only table is a
    /// subset of the all table, and the stats agree with both.
    #[test]
    fn labeled_table_is_always_a_subset(
        writes in proptest::collection::vec((0usize..2, 0usize..6, 0usize..4), 0..40)
    ) {
        let labels = ["甲", "乙", "丙", UNLABELED];
        let mut session = ready_session();
        for (sentence, position, label) in writes {
            // Out-of-range positions are rejected without corrupting state.
            let _ = session.set_word_label(sentence, position, labels[label]);
        }
        let all = word_table(session.word_store(), WordScope::All);
        let labeled = word_table(session.word_store(), WordScope::LabeledOnly);
        let stats = word_stats(session.word_store());

        prop_assert_eq!(all.len(), 10);
        prop_assert!(labeled.len() <= all.len());
        prop_assert_eq!(stats.total, all.len());
        prop_assert_eq!(stats.labeled, labeled.len());
        prop_assert!(labeled.iter().all(|r| r.label != UNLABELED));
        // Equality holds exactly when no entry carries the sentinel.
        let has_sentinel = all.iter().any(|r| r.label == UNLABELED);
        prop_assert_eq!(labeled.len() == all.len(), !has_sentinel);
    }

    /// The last write wins and reads back verbatim.
    #[test]
    fn last_write_wins(labels in proptest::collection::vec(0usize..3, 1..10)) {
        let names = ["甲", "乙", "丙"];
        let mut session = ready_session();
        for &label in &labels {
            session.set_word_label(0, 0, names[label]).unwrap();
        }
        let expected = names[*labels.last().unwrap()];
        prop_assert_eq!(session.word_label(0, 0), Some(expected));
    }

    /// Percentage stays within [0, 100] and matches the counts.
    #[test]
    fn percentage_is_bounded(count in 0usize..6) {
        let mut session = ready_session();
        for position in 0..count {
            session.set_word_label(0, position, "甲").unwrap();
        }
        let stats = word_stats(session.word_store());
        let percent = stats.labeled_percent().unwrap();
        prop_assert!((0.0..=100.0).contains(&percent));
        prop_assert!((percent - count as f64 * 10.0).abs() < 1e-9);
    }
}
