//! Error types for statement preparation.

use oxide_yesql::YesqlError;

/// Errors that can occur while preparing queries.
#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    /// Lookup or parse error from `oxide-yesql`.
    #[error(transparent)]
    Yesql(#[from] YesqlError),

    /// The database rejected a statement.
    #[error("error preparing query '{name}': {source}")]
    Prepare {
        /// Name of the query that failed.
        name: String,
        /// Database error.
        source: sqlx::Error,
    },
}

/// Result type for statement preparation.
pub type Result<T> = std::result::Result<T, PrepareError>;
