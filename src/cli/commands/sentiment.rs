//! Sentiment command - per-line scoring and distribution.

use clap::Parser;

use super::super::output::{log_info, write_output};
use super::super::parser::OutputFormat;
use super::super::utils::get_input_text;
use crate::export::to_bytes;
use crate::sentiment::{analyze, LexiconScorer, ScoredText, SentimentScorer};

/// Score sentiment per line and report the distribution.
#[derive(Parser, Debug)]
pub struct SentimentArgs {
    /// Input text to process (one item per line)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Use the built-in example text
    #[arg(long)]
    pub example: bool,

    /// Show up to N example texts per bucket
    #[arg(long, value_name = "N")]
    pub examples: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
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

/// Run the `sentiment` command.
pub fn cmd_sentiment(args: SentimentArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional, args.example)?;
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err("Invalid input: text must not be empty".to_string());
    }

    let scorer = LexiconScorer::new();
    log_info(&format!("scoring {} items with the {} backend", lines.len(), scorer.name()), args.quiet);
    let breakdown = analyze(&scorer, lines.iter().copied());
    let (positive, neutral, negative) = breakdown.counts();

    match super::table_format(args.format) {
        None => {
            let mut report = format!(
                "positive: {positive}\nneutral: {neutral}\nnegative: {negative}\n"
            );
            if let Some(n) = args.examples {
                for (bucket, items) in [
                    ("positive", &breakdown.positive),
                    ("neutral", &breakdown.neutral),
                    ("negative", &breakdown.negative),
                ] {
                    report.push_str(&format!("\n{bucket} examples:\n"));
                    for item in items.iter().take(n) {
                        report.push_str(&format!("  {:.3}  {}\n", item.score, item.text));
                    }
                }
            }
            write_output(report.as_bytes(), args.out.as_deref())
        }
        Some(format) => {
            let rows: Vec<ScoredText> = breakdown
                .positive
                .into_iter()
                .chain(breakdown.neutral)
                .chain(breakdown.negative)
                .collect();
            let bytes = to_bytes(&rows, format).map_err(|e| e.to_string())?;
            write_output(&bytes, args.out.as_deref())
        }
    }
}
