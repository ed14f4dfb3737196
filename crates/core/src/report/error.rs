//! Export error types.

use livingcost_shared::AppError;
use thiserror::Error;

/// Failure while serializing the breakdown table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer rejected a record.
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV writer could not flush its buffer.
    #[error("Failed to flush CSV writer: {0}")]
    Flush(String),

    /// The produced bytes were not UTF-8.
    #[error("Exported CSV is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        Self::Internal(err.to_string())
    }
}
