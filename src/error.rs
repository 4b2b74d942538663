//! Error types for lexikit.

use thiserror::Error;

/// Result type for lexikit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for lexikit operations.
///
/// Every variant carries a human-readable message; callers surface the
/// message and keep the session usable. No failure here is fatal.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Required input was empty or missing before an operation.
    #[error("Invalid input: {0}")]
    Input(String),

    /// A collaborator fetch failed at the network level.
    #[error("Network error: {0}")]
    Network(String),

    /// The remote resource exists but the expected identifier could not
    /// be resolved from it (e.g. no comment id on the video page).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Export was requested over an empty result set, or serializing
    /// the table failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Malformed data from a collaborator (comment XML, label input).
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid input error.
    pub fn input(msg: impl Into<String>) -> Self {
        Error::Input(msg.into())
    }

    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }

    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Create an export error.
    pub fn export(msg: impl Into<String>) -> Self {
        Error::Export(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }
}
