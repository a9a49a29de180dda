//! Error types for the Stepwise runtime.
//!
//! Uses `thiserror` for ergonomic error definition.
//! Parse failures are not represented here: the parser recovers them into
//! `LineError` statements. This type covers everything around the parser,
//! such as reading files, driving the terminal, and encoding reports.

use std::path::Path;

use thiserror::Error;

/// The main error type for Stepwise operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: &Path, source: &std::io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.display().to_string(),
            message: source.to_string(),
        })
    }

    /// Creates a terminal/line-editor error.
    #[must_use]
    pub fn editor(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Editor(message.into()))
    }

    /// Creates a report encoding error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Reading an input document failed.
    #[error("failed to read {path}: {message}")]
    Io {
        /// The path (or `-` for stdin) that could not be read.
        path: String,
        /// The underlying I/O error message.
        message: String,
    },

    /// The line editor failed.
    #[error("line editor error: {0}")]
    Editor(String),

    /// Encoding a report failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A command-line argument was invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for Stepwise operations.
pub type Result<T> = std::result::Result<T, Error>;
