//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid UTF-8.
    #[error("file {path} is not valid UTF-8")]
    Encoding { path: PathBuf },

    /// Fewer than two non-blank lines.
    #[error("CSV must contain a header and at least one data row")]
    TooFewLines,

    /// Failed to serialize rows.
    #[error("failed to write CSV: {0}")]
    CsvWrite(#[from] ::csv::Error),

    /// Failed to flush the CSV writer.
    #[error("failed to flush CSV writer: {0}")]
    Flush(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
