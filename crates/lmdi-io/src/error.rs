//! Dataset-boundary error types.

use thiserror::Error;

/// Errors while reading or writing delimited datasets.
///
/// All of these are fatal: the pipeline never proceeds on a partially read
/// configuration or input file.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid number in column {column} on line {line}: {value:?}")]
    InvalidNumber {
        column: String,
        line: usize,
        value: String,
    },

    #[error("dataset contains no usable rows")]
    Empty,
}
