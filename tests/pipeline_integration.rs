//! End-to-end flows with the bundled segmenter and scorer.

use lexikit::danmaku::{comment_table, parse_comment_xml};
use lexikit::export::{to_csv_bytes, word_table, WordScope};
use lexikit::freq::{count_words, FreqOptions};
use lexikit::prelude::*;
use lexikit::EXAMPLE_TEXT;

#[test]
fn example_text_flows_from_cleaning_to_export() {
    let cleaner = TextCleaner::new().strip_punctuation();
    let mut session = Session::new();
    session.set_text(EXAMPLE_TEXT).unwrap();
    session.clean_text(&cleaner).unwrap();
    session.apply_split().unwrap();
    assert!(session.sentences().len() >= 4);

    session.set_labels_from("术语,其他").unwrap();
    let rows = session.word_rows().unwrap();
    assert!(!rows.is_empty());

    session.set_word_label(0, 0, "术语").unwrap();
    let labeled = word_table(session.word_store(), WordScope::LabeledOnly);
    assert_eq!(labeled.len(), 1);

    let csv = to_csv_bytes(&labeled).unwrap();
    assert!(csv.starts_with(b"\xef\xbb\xbf"));
}

#[test]
fn jieba_segments_the_example_into_known_words() {
    let words = JiebaSegmenter::new().segment(EXAMPLE_TEXT);
    assert!(words.iter().any(|w| w == "人工智能"));
    assert!(words.iter().any(|w| w == "Artificial"));
}

#[test]
fn frequency_over_the_example_finds_ai() {
    let options = FreqOptions {
        drop_punctuation: true,
        drop_stop_words: true,
        top_n: Some(20),
        ..FreqOptions::default()
    };
    let rows = count_words(&JiebaSegmenter::new(), EXAMPLE_TEXT, &options).unwrap();
    assert!(rows.len() <= 20);
    assert!(rows.iter().any(|r| r.word == "AI"));
    // Descending counts.
    assert!(rows.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn fetched_comments_feed_sentiment_buckets() {
    let xml = concat!(
        r#"<i><d p="10.0,1,25,0,0,0,a,1">太棒了，真好！</d>"#,
        r#"<d p="5.0,1,25,0,0,0,b,2">什么垃圾，太烂了</d>"#,
        r#"<d p="20.0,1,25,0,0,0,c,3">今天星期二</d></i>"#
    );
    let comments = parse_comment_xml(xml);
    assert_eq!(comments.len(), 3);

    let breakdown = lexikit::sentiment::analyze(
        &LexiconScorer::new(),
        comments.iter().map(|c| c.text.as_str()),
    );
    let (positive, neutral, negative) = breakdown.counts();
    assert_eq!((positive, neutral, negative), (1, 1, 1));
}

#[test]
fn comment_rows_export_as_csv() {
    let xml = r#"<i><d p="65.0,1,25,0,0,0,a,1">弹幕一</d></i>"#;
    let rows = comment_table(&parse_comment_xml(xml));
    assert_eq!(rows[0].time, "01:05");
    let csv = to_csv_bytes(&rows).unwrap();
    let body = String::from_utf8(csv[3..].to_vec()).unwrap();
    assert!(body.starts_with("time,time_seconds,text"));
    assert!(body.contains("弹幕一"));
}

#[test]
fn annotation_keys_stay_stable_with_the_real_segmenter() {
    let mut session = Session::new();
    session.set_text("机器学习改变世界。深度学习推动进步！").unwrap();
    session.apply_split().unwrap();
    session.set_labels_from("正确,错误").unwrap();

    let first = session.word_rows().unwrap();
    session.set_word_label(1, 0, "正确").unwrap();
    let second = session.word_rows().unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.token, b.token);
    }
    assert_eq!(session.word_label(1, 0), Some("正确"));
}
