//! Output helpers for CLI commands.

use std::io::{self, Write};

/// Format error message consistently.
pub fn format_error(operation: &str, details: &str) -> String {
    format!("Failed to {}: {}", operation, details)
}

/// Log an info message to stderr (respects the quiet flag).
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

/// Write output bytes to a file or stdout.
pub fn write_output(content: &[u8], path: Option<&str>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path, e))?;
    } else {
        io::stdout()
            .write_all(content)
            .and_then(|()| io::stdout().flush())
            .map_err(|e| format!("Failed to write to stdout: {}", e))?;
    }
    Ok(())
}
