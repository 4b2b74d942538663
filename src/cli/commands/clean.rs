//! Clean command - preprocessing toggles over raw text.

use clap::Parser;

use super::super::output::write_output;
use super::super::utils::get_input_text;
use crate::clean::TextCleaner;

/// Clean text with independent toggles.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Input text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Use the built-in example text
    #[arg(long)]
    pub example: bool,

    /// Remove punctuation (terminal sentence marks are kept)
    #[arg(long = "punctuation")]
    pub strip_punctuation: bool,

    /// Remove separating whitespace entirely
    #[arg(long = "whitespace")]
    pub collapse_whitespace: bool,

    /// Remove digit runs
    #[arg(long = "digits")]
    pub strip_digits: bool,

    /// Lowercase Latin text
    #[arg(long = "lowercase")]
    pub lowercase: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Positional text argument
    #[arg(trailing_var_arg = true)]
    pub positional: Vec<String>,
}

/// Run the `clean` command.
pub fn cmd_clean(args: CleanArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional, args.example)?;
    let cleaner = TextCleaner {
        strip_punctuation: args.strip_punctuation,
        collapse_whitespace: args.collapse_whitespace,
        strip_digits: args.strip_digits,
        lowercase: args.lowercase,
    };
    let mut cleaned = cleaner.apply(&text);
    if !cleaned.ends_with('\n') {
        cleaned.push('\n');
    }
    write_output(cleaned.as_bytes(), args.out.as_deref())
}
