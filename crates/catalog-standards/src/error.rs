//! Error types for reference data loading.

use std::path::PathBuf;
use thiserror::Error;

use catalog_ingest::IngestError;

/// Errors that can occur when loading reference vocabularies.
///
/// All of these are fatal: no row is validated once one is raised.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Reference file not found.
    #[error("reference file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the reference worksheet.
    #[error("failed to read reference file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: IngestError,
    },

    /// Required column missing from a reference worksheet.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Reference worksheet has fewer columns than the loader needs.
    #[error("{path} has {found} column(s), expected at least {expected}")]
    TooFewColumns {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    /// Failed to parse embedded taxonomy CSV.
    #[error("failed to parse embedded taxonomy {file}: {message}")]
    CsvParse { file: String, message: String },

    /// Invalid value in an embedded taxonomy.
    #[error("invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: String,
    },
}

/// Result type for reference data loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
