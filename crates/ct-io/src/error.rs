//! Error types for ct-io.

use ct_core::CtError;
use thiserror::Error;

/// Errors raised while reading or writing a record stream.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    /// The row parsed but describes an impossible record.
    #[error("line {line}: {source}")]
    Record {
        line:   u64,
        #[source]
        source: CtError,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
