//! Split command - sentence segmentation.

use clap::Parser;
use serde::Serialize;

use super::super::output::{log_info, write_output};
use super::super::parser::OutputFormat;
use super::super::utils::get_input_text;
use crate::export::to_bytes;
use crate::split::split_indexed;

/// Split text into sentences.
#[derive(Parser, Debug)]
pub struct SplitArgs {
    /// Input text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Use the built-in example text
    #[arg(long)]
    pub example: bool,

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

#[derive(Serialize)]
struct SplitRow {
    sentence_id: usize,
    text: String,
}

/// Run the `split` command.
pub fn cmd_split(args: SplitArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional, args.example)?;
    let sentences = split_indexed(&text);
    if sentences.is_empty() {
        return Err("Invalid input: text must not be empty".to_string());
    }
    log_info(&format!("{} sentences", sentences.len()), args.quiet);

    match super::table_format(args.format) {
        None => {
            let mut listing = String::new();
            for s in &sentences {
                listing.push_str(&format!("{:>4}  {}\n", s.display_id(), s.text));
            }
            write_output(listing.as_bytes(), args.out.as_deref())
        }
        Some(format) => {
            let rows: Vec<SplitRow> = sentences
                .into_iter()
                .map(|s| SplitRow {
                    sentence_id: s.display_id(),
                    text: s.text,
                })
                .collect();
            let bytes = to_bytes(&rows, format).map_err(|e| e.to_string())?;
            write_output(&bytes, args.out.as_deref())
        }
    }
}
