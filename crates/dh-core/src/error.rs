//! Error types for the dihadron analysis crates.

use thiserror::Error;

/// Analysis error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A centrality class accepted no trigger particles over the whole run,
    /// so its histogram cannot be normalized.
    #[error("centrality class '{label}' has zero accepted triggers")]
    EmptyBin {
        /// Label of the offending centrality class.
        label: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
