//! Diagnostics CSV: one line per evaluated cell.

use std::path::Path;

use catalog_model::CellOutcome;
use catalog_validate::ValidationReport;
use serde::Serialize;

use crate::error::{OutputError, Result};

/// One diagnostics line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRecord<'a> {
    pub row: usize,
    pub column: &'a str,
    pub status: &'static str,
    pub severity: Option<&'static str>,
    pub reason: Option<&'a str>,
}

impl<'a> From<&'a CellOutcome> for DiagnosticRecord<'a> {
    fn from(outcome: &'a CellOutcome) -> Self {
        Self {
            row: outcome.row,
            column: outcome.marked_column(),
            status: if outcome.outcome.is_valid() { "Valid" } else { "Invalid" },
            severity: outcome.outcome.severity().map(|severity| severity.label()),
            reason: outcome.outcome.reason(),
        }
    }
}

/// Write every outcome of `report` to `path`.
pub fn write_diagnostics(path: &Path, report: &ValidationReport) -> Result<()> {
    let wrap = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    for outcome in &report.outcomes {
        writer.serialize(DiagnosticRecord::from(outcome)).map_err(wrap)?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        lines = report.outcomes.len(),
        "wrote diagnostics"
    );
    Ok(())
}
