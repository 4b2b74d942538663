//! # lexikit
//!
//! Text-analysis toolkit for mixed Chinese/Latin corpora.
//!
//! - **Fetch**: timed comment streams from video pages
//! - **Clean**: punctuation / whitespace / digit / case toggles
//! - **Split**: sentence segmentation on terminal punctuation
//! - **Count**: word frequency and character statistics
//! - **Score**: sentiment bucketing (positive / neutral / negative)
//! - **Annotate**: word-level and sentence-level labeling sessions
//!
//! ## Quick Start: annotation session
//!
//! ```rust
//! use lexikit::{AnnotationMode, Session};
//!
//! let mut session = Session::new();
//! session.set_text("AI是一种技术。它很有用！")?;
//! session.apply_split()?;
//! session.set_labels_from("名词,动词")?;
//!
//! // Word mode: every token starts unlabeled, selections stick.
//! session.word_rows()?;
//! session.set_word_label(0, 0, "名词")?;
//!
//! // Sentence mode coexists with word mode.
//! session.set_mode(AnnotationMode::Sentence);
//! session.sentence_rows()?;
//! session.set_sentence_category(1, "动词")?;
//! # Ok::<(), lexikit::Error>(())
//! ```
//!
//! ## Quick Start: frequency and export
//!
//! ```rust
//! use lexikit::export::to_csv_bytes;
//! use lexikit::freq::{count_words, FreqOptions};
//! use lexikit::segment::JiebaSegmenter;
//!
//! let rows = count_words(&JiebaSegmenter::new(), "人工智能改变生活", &FreqOptions::default())?;
//! let csv = to_csv_bytes(&rows)?;
//! assert!(csv.starts_with(b"\xef\xbb\xbf"));
//! # Ok::<(), lexikit::Error>(())
//! ```
//!
//! ## Design
//!
//! - **Session-scoped state**: everything that outlives one interaction
//!   lives in an explicit [`Session`] passed to every operation; no
//!   process-wide mutable state.
//! - **Collaborator seams**: segmentation ([`segment::Segmenter`]) and
//!   sentiment scoring ([`sentiment::SentimentScorer`]) are traits; the
//!   bundled backends are defaults, not assumptions.
//! - **Stable token identity**: tokenization is cached per sentence, so
//!   position-based annotation keys cannot drift between reads.
//! - **Tolerant failure**: every error is a message the operator can
//!   read; no operation poisons the session.

#![warn(missing_docs)]

pub mod annotate;
pub mod clean;
pub mod cli;
pub mod danmaku;
mod error;
pub mod export;
pub mod freq;
pub mod label;
pub mod lang;
pub mod segment;
pub mod sentiment;
pub mod session;
pub mod split;

pub use annotate::{AnnotationMode, SentenceEntry, WordEntry};
pub use clean::TextCleaner;
pub use error::{Error, Result};
pub use label::{LabelSet, UNLABELED};
pub use session::Session;
pub use split::{split_sentences, Sentence};

/// Built-in demo paragraph for exercising the pipeline without an
/// upload, mixed Chinese/English like the corpora the tool targets.
pub const EXAMPLE_TEXT: &str = "人工智能（Artificial Intelligence, AI）是计算机科学的一个分支，\
旨在创建能够像人类一样思考和学习的智能机器。AI技术包括机器学习（Machine Learning）、\
自然语言处理（Natural Language Processing）和计算机视觉（Computer Vision）等。\
随着科技的进步，AI在各个领域的应用越来越广泛，例如自动驾驶（Autonomous Driving）、\
医疗诊断（Medical Diagnosis）和智能客服（Intelligent Customer Service）等。\
AI的快速发展不仅改变了我们的生活方式，也引发了关于伦理和隐私的广泛讨论。";

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use lexikit::prelude::*;
    //!
    //! let mut session = Session::new();
    //! session.set_text("一句话。").unwrap();
    //! session.apply_split().unwrap();
    //! ```
    pub use crate::annotate::{AnnotationMode, SentenceEntry, WordEntry};
    pub use crate::clean::TextCleaner;
    pub use crate::error::{Error, Result};
    pub use crate::export::{ExportFormat, WordScope};
    pub use crate::label::{LabelSet, UNLABELED};
    pub use crate::segment::{JiebaSegmenter, Segmenter, Token};
    pub use crate::sentiment::{LexiconScorer, Polarity, SentimentScorer};
    pub use crate::session::Session;
    pub use crate::split::{split_sentences, Sentence};
}
