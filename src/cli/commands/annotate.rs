//! Annotate command - build labeling tables from text and a label set.
//!
//! The command runs a full session: set text, apply the split,
//! configure labels, render the requested mode, and export the table.
//! Word-mode tables start with every token on the unlabeled sentinel;
//! the table is the sheet an annotator fills in.

use clap::{Parser, ValueEnum};

use super::super::output::{log_info, write_output};
use super::super::parser::OutputFormat;
use super::super::utils::get_input_text;
use crate::annotate::AnnotationMode;
use crate::export::{sentence_table, to_bytes, word_stats, word_table, WordScope};
use crate::session::Session;

/// Build an annotation table from text and a label set.
#[derive(Parser, Debug)]
pub struct AnnotateArgs {
    /// Input text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Use the built-in example text
    #[arg(long)]
    pub example: bool,

    /// Comma-separated category names, e.g. "人名,地名,其他"
    #[arg(short, long, value_name = "NAMES")]
    pub labels: String,

    /// Annotation mode
    #[arg(short, long, value_enum, default_value = "word")]
    pub mode: ModeArg,

    /// Word-mode row scope
    #[arg(long, value_enum, default_value = "all")]
    pub scope: ScopeArg,

    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Positional text argument
    #[arg(trailing_var_arg = true)]
    pub positional: Vec<String>,
}

/// CLI mirror of [`AnnotationMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// One row per token.
    Word,
    /// One row per sentence.
    Sentence,
}

/// CLI mirror of [`WordScope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScopeArg {
    /// Every entry.
    All,
    /// Only entries with a real label.
    Labeled,
}

/// Run the `annotate` command.
pub fn cmd_annotate(args: AnnotateArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional, args.example)?;

    let mut session = Session::new();
    session.set_text(text).map_err(|e| e.to_string())?;
    session.apply_split().map_err(|e| e.to_string())?;
    session
        .set_labels_from(&args.labels)
        .map_err(|e| e.to_string())?;

    let format = super::table_format(args.format);

    let bytes = match args.mode {
        ModeArg::Word => {
            session.set_mode(AnnotationMode::Word);
            session.word_rows().map_err(|e| e.to_string())?;
            let stats = word_stats(session.word_store());
            let percent = stats
                .percent_display()
                .unwrap_or_else(|| "n/a".to_string());
            log_info(
                &format!(
                    "{} entries, {} labeled ({})",
                    stats.total, stats.labeled, percent
                ),
                args.quiet,
            );
            let scope = match args.scope {
                ScopeArg::All => WordScope::All,
                ScopeArg::Labeled => WordScope::LabeledOnly,
            };
            let rows = word_table(session.word_store(), scope);
            match format {
                Some(format) => to_bytes(&rows, format).map_err(|e| e.to_string())?,
                None => {
                    let mut listing = String::new();
                    for row in &rows {
                        listing.push_str(&format!(
                            "{:>4}  {}  {}\n",
                            row.sentence_id, row.word, row.label
                        ));
                    }
                    listing.into_bytes()
                }
            }
        }
        ModeArg::Sentence => {
            session.set_mode(AnnotationMode::Sentence);
            session.sentence_rows().map_err(|e| e.to_string())?;
            log_info(
                &format!("{} sentences classified", session.sentence_store().len()),
                args.quiet,
            );
            let rows = sentence_table(session.sentence_store());
            match format {
                Some(format) => to_bytes(&rows, format).map_err(|e| e.to_string())?,
                None => {
                    let mut listing = String::new();
                    for row in &rows {
                        listing.push_str(&format!(
                            "{:>4}  {}  {}\n",
                            row.sentence_id, row.category, row.text
                        ));
                    }
                    listing.into_bytes()
                }
            }
        }
    };

    write_output(&bytes, args.out.as_deref())
}
