//! Error types for output writers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing validation outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input path has no file stem to derive output names from.
    #[error("cannot derive output names from {path}")]
    NoFileStem { path: PathBuf },

    /// Worksheet is wider or longer than a workbook allows.
    #[error("worksheet exceeds workbook limits: {message}")]
    TooLarge { message: String },

    /// Workbook could not be built or saved.
    #[error("failed to write workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },

    /// Diagnostics CSV could not be written.
    #[error("failed to write diagnostics {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON report could not be written.
    #[error("failed to write JSON report {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
