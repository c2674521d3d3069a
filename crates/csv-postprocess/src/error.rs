//! Error types for the CSV post-processing passes.

use thiserror::Error;

/// Errors that can occur while post-processing a CSV batch.
#[derive(Error, Debug)]
pub enum PostprocessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file '{0}' has no header row")]
    MissingHeader(String),

    #[error("CSV file '{path}' has no '{column}' column")]
    MissingColumn { column: &'static str, path: String },
}
