//! Fetch command - timed comment streams.

use clap::Parser;

use super::super::output::{log_info, write_output};
use super::super::parser::OutputFormat;
use crate::danmaku::{comment_table, DanmakuClient};
use crate::export::to_bytes;

/// Fetch the timed comment stream of a video.
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Video page URL
    #[arg(short, long)]
    pub url: String,

    /// Show at most N comments in human output
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<String>,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the `fetch` command.
pub fn cmd_fetch(args: FetchArgs) -> Result<(), String> {
    let client = DanmakuClient::new();
    let comments = client
        .fetch_comments(&args.url)
        .map_err(|e| e.to_string())?;
    log_info(&format!("fetched {} comments", comments.len()), args.quiet);

    match super::table_format(args.format) {
        None => {
            let mut listing = String::new();
            for comment in comments.iter().take(args.limit) {
                listing.push_str(&format!("{}  {}\n", comment.timestamp(), comment.text));
            }
            write_output(listing.as_bytes(), args.out.as_deref())
        }
        Some(format) => {
            let rows = comment_table(&comments);
            let bytes = to_bytes(&rows, format).map_err(|e| e.to_string())?;
            write_output(&bytes, args.out.as_deref())
        }
    }
}
