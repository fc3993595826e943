//! Output writers for catalog validation runs.
//!
//! - **Marked workbook**: `Verified_<stem>.xlsx`, input values with red
//!   (Hard) and yellow (Soft) fills
//! - **Diagnostics**: `Verified_<stem>_diagnostics.csv`, one line per
//!   evaluated cell
//! - **JSON report**: optional run summary with every failure

mod diagnostics;
mod error;
mod json;
mod paths;
mod workbook;

use std::path::Path;

use catalog_model::Row;
use catalog_validate::{ValidationReport, apply_markings};

pub use diagnostics::{DiagnosticRecord, write_diagnostics};
pub use error::{OutputError, Result};
pub use json::{JsonReport, write_json_report};
pub use paths::{OUTPUT_PREFIX, OutputPaths};
pub use workbook::{HARD_FILL, MarkedWorkbook, SHEET_NAME, SOFT_FILL};

/// Write the marked workbook and the diagnostics file for one run.
///
/// The marked sheet takes `sheet_name` when given, else [`SHEET_NAME`].
pub fn write_outputs(
    paths: &OutputPaths,
    sheet_name: Option<&str>,
    columns: &[String],
    rows: &[Row],
    report: &ValidationReport,
) -> Result<()> {
    paths.ensure_dir()?;
    let mut workbook =
        MarkedWorkbook::new(columns, rows).with_sheet_name(sheet_name.unwrap_or(SHEET_NAME));
    let marked = apply_markings(report, &mut workbook);
    tracing::debug!(marked, cells = workbook.marked_cells(), "applied markings");
    workbook.save(&paths.workbook)?;
    write_diagnostics(&paths.diagnostics, report)?;
    Ok(())
}
