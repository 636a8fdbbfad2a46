//! Error types for loading, filtering and writing datasets.
//!
//! Everything in the library returns [`FilterError`]; the binary wraps it in
//! `anyhow` for reporting.

use std::path::Path;

use thiserror::Error;

/// Errors produced by the read / filter / write pipeline.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Opening, reading or creating a file failed.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader or writer rejected the data.
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The input has no header line at all.
    #[error("'{path}' has no header row")]
    MissingHeader { path: String },

    /// A record carries more fields than the header declares.
    #[error("'{path}' row {row}: expected at most {expected} fields, found {found}")]
    RaggedRecord {
        path: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The requested column is not part of the header.
    #[error("column '{column}' not found (available: {})", available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;

/// Build a [`FilterError::Io`] carrying the offending path.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> FilterError {
    FilterError::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Build a [`FilterError::Csv`] carrying the offending path.
pub fn csv_error_with_path<P: AsRef<Path>>(source: csv::Error, path: P) -> FilterError {
    FilterError::Csv {
        path: path.as_ref().display().to_string(),
        source,
    }
}
