//! Chars command - character-level statistics.

use clap::Parser;

use super::super::output::write_output;
use super::super::parser::OutputFormat;
use super::super::utils::get_input_text;
use crate::export::to_bytes;
use crate::freq::char_stats;

/// Character-level statistics.
#[derive(Parser, Debug)]
pub struct CharsArgs {
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

    /// Positional text argument
    #[arg(trailing_var_arg = true)]
    pub positional: Vec<String>,
}

/// Run the `chars` command.
pub fn cmd_chars(args: CharsArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional, args.example)?;
    if text.trim().is_empty() {
        return Err("Invalid input: text must not be empty".to_string());
    }
    let stats = char_stats(&text);

    match super::table_format(args.format) {
        None => {
            let listing = format!(
                "characters: {}\nwords: {}\ncharacters excluding punctuation: {}\n",
                stats.chars, stats.words, stats.chars_no_punctuation
            );
            write_output(listing.as_bytes(), args.out.as_deref())
        }
        Some(format) => {
            let bytes = to_bytes(&[stats], format).map_err(|e| e.to_string())?;
            write_output(&bytes, args.out.as_deref())
        }
    }
}
