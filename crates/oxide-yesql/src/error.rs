//! Error types for query parsing and binding.

use std::path::PathBuf;

use crate::line::LineKind;

/// A structural error in a query document.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A `name` tag reuses a name declared earlier in the document.
    #[error("line {line}: duplicate query name '{name}' (first declared on line {first_line})")]
    DuplicateName {
        /// The repeated name.
        name: String,
        /// Line of the repeated declaration.
        line: usize,
        /// Line of the original declaration.
        first_line: usize,
    },

    /// A statement or tag appears before any `name` declaration.
    #[error("line {line}: {kind} found before any '-- name:' declaration")]
    MissingName {
        /// Line of the offending statement or tag.
        line: usize,
        /// What was found there.
        kind: LineKind,
    },
}

impl ParseError {
    /// Returns the line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DuplicateName { line, .. } | Self::MissingName { line, .. } => *line,
        }
    }
}

/// Errors from loading, parsing, or binding queries.
#[derive(Debug, thiserror::Error)]
pub enum YesqlError {
    /// The document is structurally invalid.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A query file could not be read.
    #[error("failed to read query file '{}': {source}", path.display())]
    SourceUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Reading from an in-memory source failed.
    #[error("failed to read queries: {0}")]
    Read(#[from] std::io::Error),

    /// The document is not valid UTF-8.
    #[error("query source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A requested query name does not exist.
    #[error("query '{0}' not found in query map")]
    QueryNotFound(String),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, YesqlError>;
