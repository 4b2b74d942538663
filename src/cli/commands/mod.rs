//! Subcommand argument structs and handlers.

use super::parser::OutputFormat;
use crate::export::ExportFormat;

mod annotate;
mod chars;
mod clean;
mod fetch;
mod freq;
mod sentiment;
mod split;
mod tokenize;

pub use annotate::{cmd_annotate, AnnotateArgs};
pub use chars::{cmd_chars, CharsArgs};
pub use clean::{cmd_clean, CleanArgs};
pub use fetch::{cmd_fetch, FetchArgs};
pub use freq::{cmd_freq, FreqArgs};
pub use sentiment::{cmd_sentiment, SentimentArgs};
pub use split::{cmd_split, SplitArgs};
pub use tokenize::{cmd_tokenize, TokenizeArgs};

/// Map a table-capable output format to its serialization target.
/// `None` means human-readable terminal output.
pub(crate) fn table_format(format: OutputFormat) -> Option<ExportFormat> {
    match format {
        OutputFormat::Human => None,
        OutputFormat::Csv => Some(ExportFormat::Csv),
        OutputFormat::Json => Some(ExportFormat::Json),
    }
}
