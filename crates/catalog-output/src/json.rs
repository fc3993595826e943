//! JSON run report.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use catalog_model::CellOutcome;
use catalog_validate::{ColumnSummary, ValidationOptions, ValidationReport};
use serde::Serialize;

use crate::error::{OutputError, Result};

/// Serialized form of a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub input: String,
    pub options: ValidationOptions,
    pub rows: usize,
    pub valid: usize,
    pub hard: usize,
    pub soft: usize,
    pub columns: BTreeMap<String, ColumnSummary>,
    /// Failed cells only.
    pub failures: Vec<&'a CellOutcome>,
}

impl<'a> JsonReport<'a> {
    pub fn new(input: &Path, options: ValidationOptions, report: &'a ValidationReport) -> Self {
        Self {
            input: input.display().to_string(),
            options,
            rows: report.rows,
            valid: report.valid_count(),
            hard: report.hard_count(),
            soft: report.soft_count(),
            columns: report.by_column(),
            failures: report
                .outcomes
                .iter()
                .filter(|outcome| !outcome.outcome.is_valid())
                .collect(),
        }
    }
}

/// Write `report` as pretty-printed JSON.
pub fn write_json_report(path: &Path, report: &JsonReport<'_>) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote JSON report");
    Ok(())
}
