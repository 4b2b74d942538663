//! Freq command - word-frequency tables.

use clap::Parser;

use super::super::output::{log_info, write_output};
use super::super::parser::OutputFormat;
use super::super::utils::get_input_text;
use crate::export::to_bytes;
use crate::freq::{count_words, FreqOptions};
use crate::segment::JiebaSegmenter;

/// Count word frequencies.
#[derive(Parser, Debug)]
pub struct FreqArgs {
    /// Input text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Use the built-in example text
    #[arg(long)]
    pub example: bool,

    /// Drop punctuation tokens
    #[arg(long = "punctuation")]
    pub drop_punctuation: bool,

    /// Drop stop words (built-in list plus --custom additions)
    #[arg(long = "stop-words")]
    pub drop_stop_words: bool,

    /// Drop purely numeric tokens
    #[arg(long = "numbers")]
    pub drop_numbers: bool,

    /// Extra stop words, comma-separated
    #[arg(long, value_name = "WORDS")]
    pub custom: Option<String>,

    /// Keep only the N most frequent words (0 keeps everything)
    #[arg(long, default_value_t = 20, value_name = "N")]
    pub top: usize,

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

/// Run the `freq` command.
pub fn cmd_freq(args: FreqArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional, args.example)?;
    let options = FreqOptions {
        drop_punctuation: args.drop_punctuation,
        drop_stop_words: args.drop_stop_words,
        drop_numbers: args.drop_numbers,
        custom_stop_words: args
            .custom
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        top_n: if args.top == 0 { None } else { Some(args.top) },
    };
    let rows = count_words(&JiebaSegmenter::new(), &text, &options).map_err(|e| e.to_string())?;
    log_info(&format!("{} distinct words", rows.len()), args.quiet);

    match super::table_format(args.format) {
        None => {
            let mut listing = String::new();
            for row in &rows {
                listing.push_str(&format!("{:>6}  {}\n", row.count, row.word));
            }
            write_output(listing.as_bytes(), args.out.as_deref())
        }
        Some(format) => {
            let bytes = to_bytes(&rows, format).map_err(|e| e.to_string())?;
            write_output(&bytes, args.out.as_deref())
        }
    }
}
