//! Utility functions for CLI commands.

use std::io::{self, Read};

use super::output::format_error;

/// Get input text from the first available source: the `--text` arg,
/// an input file, positional words, the built-in example (when asked
/// for), or stdin.
pub fn get_input_text(
    text: &Option<String>,
    file: Option<&str>,
    positional: &[String],
    example: bool,
) -> Result<String, String> {
    if example {
        return Ok(crate::EXAMPLE_TEXT.to_string());
    }
    if let Some(t) = text {
        Ok(t.clone())
    } else if let Some(f) = file {
        read_input_file(f)
    } else if !positional.is_empty() {
        Ok(positional.join(" "))
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format_error("read stdin", &e.to_string()))?;
        Ok(buffer)
    }
}

/// Read a file with consistent error handling.
pub fn read_input_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path)
        .map_err(|e| format_error("read file", &format!("{}: {}", path, e)))
}
