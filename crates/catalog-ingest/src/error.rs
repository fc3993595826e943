//! Error types for worksheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a catalog worksheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File extension is neither `.csv` nor a workbook format.
    #[error("unsupported file type for {path}: expected .csv, .xlsx, .xlsm or .xls")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to open or parse a workbook.
    #[error("failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// Requested worksheet does not exist.
    #[error("worksheet '{sheet}' not found in {path} (available: {available})")]
    SheetNotFound {
        sheet: String,
        path: PathBuf,
        available: String,
    },

    /// Worksheet has no header row.
    #[error("worksheet is empty: {path}")]
    EmptySheet { path: PathBuf },

    /// Two header cells normalize to the same name.
    #[error("duplicate column '{column}' in {path}")]
    DuplicateColumn { column: String, path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
