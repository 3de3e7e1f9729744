//! Error types for lift-output.

use thiserror::Error;

/// Errors that can occur while writing run output.
///
/// These never reach the simulation: pipeline threads log and drop them.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
