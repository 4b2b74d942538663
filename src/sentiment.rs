//! Sentiment scoring seam and polarity bucketing.
//!
//! Scoring itself is a collaborator contract: anything that maps text
//! to a score in `[0, 1]` satisfies [`SentimentScorer`]. The crate
//! ships a small lexicon-based scorer as the always-available fallback
//! backend; callers bucket scores with [`Polarity::from_score`].

use crate::{Error, Result};
use serde::Serialize;

/// Sentiment polarity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Score above 0.6.
    Positive,
    /// Score in [0.4, 0.6].
    Neutral,
    /// Score below 0.4.
    Negative,
}

impl Polarity {
    /// Bucket a score from a [`SentimentScorer`].
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.6 {
            Polarity::Positive
        } else if score >= 0.4 {
            Polarity::Neutral
        } else {
            Polarity::Negative
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Polarity::Positive => "positive",
            Polarity::Neutral => "neutral",
            Polarity::Negative => "negative",
        };
        write!(f, "{name}")
    }
}

/// Scoring seam: text in, score in `[0, 1]` out.
pub trait SentimentScorer: Send + Sync {
    /// Score `text`. Implementations must stay within `[0, 1]`.
    fn score(&self, text: &str) -> Result<f64>;

    /// Backend name for display.
    fn name(&self) -> &'static str {
        "unknown"
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "好", "棒", "赞", "喜欢", "爱", "开心", "精彩", "厉害", "支持", "哈哈", "优秀", "感谢",
    "漂亮", "牛", "强", "温柔", "可爱", "good", "great", "love", "nice", "awesome", "cool",
    "happy", "best", "amazing", "fun", "wow",
];

const NEGATIVE_WORDS: &[&str] = &[
    "差", "烂", "讨厌", "恨", "难受", "无聊", "垃圾", "失望", "糟糕", "坏", "哭", "难过",
    "无语", "尬", "bad", "awful", "hate", "terrible", "boring", "worst", "sad", "trash",
    "annoying", "ugh",
];

/// Lexicon-based scorer: counts polarity-word hits.
///
/// Deliberately small and dependency-free; it exists so sentiment
/// bucketing works without a trained model, not to compete with one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    /// Create the lexicon scorer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<f64> {
        if text.trim().is_empty() {
            return Err(Error::input("cannot score empty text"));
        }
        let lower = text.to_lowercase();
        let hits = |words: &[&str]| -> f64 {
            words
                .iter()
                .map(|w| lower.matches(w).count())
                .sum::<usize>() as f64
        };
        let positive = hits(POSITIVE_WORDS);
        let negative = hits(NEGATIVE_WORDS);
        if positive + negative == 0.0 {
            return Ok(0.5);
        }
        Ok(0.5 + 0.5 * (positive - negative) / (positive + negative))
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

/// Scored text with its bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredText {
    /// The scored text.
    pub text: String,
    /// Raw score in `[0, 1]`.
    pub score: f64,
    /// Bucketed polarity.
    pub polarity: Polarity,
}

/// Per-bucket grouping of a scored batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SentimentBreakdown {
    /// Texts with score above 0.6.
    pub positive: Vec<ScoredText>,
    /// Texts with score in [0.4, 0.6].
    pub neutral: Vec<ScoredText>,
    /// Texts with score below 0.4.
    pub negative: Vec<ScoredText>,
}

impl SentimentBreakdown {
    /// Per-bucket counts as (positive, neutral, negative).
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.positive.len(),
            self.neutral.len(),
            self.negative.len(),
        )
    }

    /// Total scored texts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.positive.len() + self.neutral.len() + self.negative.len()
    }
}

/// Score a batch of texts and group them by bucket.
///
/// Items the scorer rejects are skipped, matching the tolerant batch
/// behavior of the source tool: one unscorable comment never fails the
/// whole analysis.
pub fn analyze<'a, I>(scorer: &dyn SentimentScorer, texts: I) -> SentimentBreakdown
where
    I: IntoIterator<Item = &'a str>,
{
    let mut breakdown = SentimentBreakdown::default();
    for text in texts {
        let Ok(score) = scorer.score(text) else {
            continue;
        };
        let polarity = Polarity::from_score(score);
        let scored = ScoredText {
            text: text.to_string(),
            score,
            polarity,
        };
        match polarity {
            Polarity::Positive => breakdown.positive.push(scored),
            Polarity::Neutral => breakdown.neutral.push(scored),
            Polarity::Negative => breakdown.negative.push(scored),
        }
    }
    breakdown
}
