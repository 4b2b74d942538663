//! Tokenize command - word segmentation output.

use clap::Parser;

use super::super::output::{log_info, write_output};
use super::super::utils::get_input_text;
use crate::segment::{JiebaSegmenter, Segmenter};

/// Segment text into words.
#[derive(Parser, Debug)]
pub struct TokenizeArgs {
    /// Input text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Use the built-in example text
    #[arg(long)]
    pub example: bool,

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

/// Run the `tokenize` command.
pub fn cmd_tokenize(args: TokenizeArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional, args.example)?;
    if text.trim().is_empty() {
        return Err("Invalid input: text must not be empty".to_string());
    }
    let words = JiebaSegmenter::new().segment(&text);
    log_info(&format!("{} tokens", words.len()), args.quiet);
    let mut joined = words.join(" ");
    joined.push('\n');
    write_output(joined.as_bytes(), args.out.as_deref())
}
