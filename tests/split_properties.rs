//! Sentence-splitter behavior against the documented contract.

use lexikit::split::{is_terminal, split_indexed, split_sentences};

#[test]
fn chinese_two_sentence_scenario() {
    let parts = split_sentences("AI是一种技术。它很有用！");
    assert_eq!(parts, vec!["AI是一种技术。", "它很有用！"]);
}

#[test]
fn delimiter_stays_with_preceding_sentence() {
    let parts = split_sentences("你好吗？很好。");
    assert!(parts[0].ends_with('？'));
    assert!(parts[1].ends_with('。'));
}

#[test]
fn trailing_remainder_becomes_final_sentence() {
    let parts = split_sentences("完整的一句。然后是残句");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1], "然后是残句");
    assert!(!parts[1].ends_with(|c: char| is_terminal(c)));
}

#[test]
fn every_non_final_part_ends_with_a_terminal() {
    let parts = split_sentences("一。二！三？四.五!六?残");
    for part in &parts[..parts.len() - 1] {
        let last = part.chars().last().unwrap();
        assert!(is_terminal(last), "part {part:?} should end with a terminal");
    }
}

#[test]
fn abbreviation_periods_split_aggressively() {
    // The splitter has no abbreviation list; each period is a boundary.
    let parts = split_sentences("U.S.A.");
    assert_eq!(parts, vec!["U.", "S.", "A."]);
}

#[test]
fn no_characters_lost_on_mixed_text() {
    let text = "第一句。 Second sentence! 最后。";
    let rejoined: String = split_sentences(text).concat();
    let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(squash(&rejoined), squash(text));
}

#[test]
fn splitting_a_split_sentence_is_identity() {
    for part in split_sentences("东西。南北！中间?没有结尾") {
        assert_eq!(split_sentences(&part), vec![part]);
    }
}

#[test]
fn indices_are_stable_within_one_split() {
    let first = split_indexed("一。二。三。");
    let second = split_indexed("一。二。三。");
    assert_eq!(first, second);
    assert_eq!(first.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn resplit_of_changed_text_is_a_fresh_sequence() {
    let old = split_indexed("甲。乙。");
    let new = split_indexed("丙。");
    // Index 0 now names a different sentence; nothing relates the two splits.
    assert_eq!(old[0].index, new[0].index);
    assert_ne!(old[0].text, new[0].text);
}
