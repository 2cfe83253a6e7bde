//! Error types for the gstrecon library.

use crate::Side;
use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a reconciliation run.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred during read or write operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing or writing CSV data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from a source table. The run aborts
    /// before any stage produces output.
    #[error("{side} data is missing required column '{column}'")]
    MissingColumn { side: Side, column: String },

    /// A composite key survived aggregation more than once on one side.
    /// Merging would be undefined, so the run aborts.
    #[error("duplicate composite key '{key}' in aggregated {side} records")]
    DuplicateKey { side: Side, key: String },

    /// Invalid source side specified.
    #[error("Invalid side: {0}")]
    InvalidSide(String),
}
