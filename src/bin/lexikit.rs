//! lexikit binary entry point.

use clap::Parser;

use lexikit::cli::commands;
use lexikit::cli::parser::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(cli) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Fetch(args) => commands::cmd_fetch(args),
        Commands::Clean(args) => commands::cmd_clean(args),
        Commands::Split(args) => commands::cmd_split(args),
        Commands::Tokenize(args) => commands::cmd_tokenize(args),
        Commands::Freq(args) => commands::cmd_freq(args),
        Commands::Chars(args) => commands::cmd_chars(args),
        Commands::Sentiment(args) => commands::cmd_sentiment(args),
        Commands::Annotate(args) => commands::cmd_annotate(args),
    }
}
