use thiserror::Error;

/// Convenience result type for cleaning operations.
pub type CleaningResult<T> = Result<T, CleaningError>;

/// Error type returned by the load/save adapters and the pipeline entrypoints.
///
/// Only two tiers of failure surface here: fatal load problems (missing/unreadable input) and
/// contract violations (a required column is absent). Per-value parse failures never become
/// errors at all: each cleaning rule degrades the offending cell to [`crate::types::Value::Null`]
/// and the pipeline continues, so there is deliberately no per-cell error variant.
#[derive(Debug, Error)]
pub enum CleaningError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not carry the required contract columns.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },
}
