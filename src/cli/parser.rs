//! CLI argument parsing and structure definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Text-analysis CLI for mixed Chinese/Latin corpora.
#[derive(Parser)]
#[command(name = "lexikit")]
#[command(
    author,
    version,
    about = "Text-analysis CLI - comment fetching, cleaning, frequency, sentiment, annotation",
    long_about = r#"
lexikit - a text-analysis toolkit for mixed Chinese/Latin corpora

CAPABILITIES:
  • Comment fetching  - timed comment streams from video pages
  • Corpus cleaning   - punctuation / whitespace / digit / case toggles
  • Sentence splitting - terminal-punctuation segmentation
  • Word frequency    - segmenter-backed counts with stop-word filters
  • Sentiment         - positive / neutral / negative bucketing
  • Annotation sheets - word-level and sentence-level labeling tables

EXAMPLES:
  lexikit split --example
  lexikit clean -t "第 1 章：开始。" --punctuation --digits
  lexikit freq --example --stop-words --top 10
  lexikit sentiment -f comments.txt
  lexikit annotate --example --labels "名词,动词" --mode word --format csv
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the timed comment stream of a video
    #[command(visible_alias = "f")]
    Fetch(super::commands::FetchArgs),

    /// Clean text with independent toggles
    #[command(visible_alias = "c")]
    Clean(super::commands::CleanArgs),

    /// Split text into sentences
    #[command(visible_alias = "s")]
    Split(super::commands::SplitArgs),

    /// Segment text into words
    #[command(visible_alias = "t")]
    Tokenize(super::commands::TokenizeArgs),

    /// Count word frequencies
    Freq(super::commands::FreqArgs),

    /// Character-level statistics
    Chars(super::commands::CharsArgs),

    /// Score sentiment per line and report the distribution
    Sentiment(super::commands::SentimentArgs),

    /// Build an annotation table from text and a label set
    #[command(visible_alias = "a")]
    Annotate(super::commands::AnnotateArgs),
}

/// Output format shared by table-producing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable terminal output.
    Human,
    /// UTF-8 CSV with BOM.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}
