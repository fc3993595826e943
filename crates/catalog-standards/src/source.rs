//! Reference worksheet access shared by the loaders.

use std::path::Path;

use catalog_ingest::{RawTable, read_table};
use catalog_model::CellValue;

use crate::error::{Result, StandardsError};

/// Read the first worksheet of a reference file (`.xlsx` or `.csv`).
pub(crate) fn read_reference(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(StandardsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    read_table(path, None).map_err(|source| StandardsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Index of a named column, or a fatal error naming it.
pub(crate) fn column_index(table: &RawTable, column: &str, path: &Path) -> Result<usize> {
    table
        .headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| StandardsError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
        })
}

/// Require at least `expected` columns.
pub(crate) fn require_width(table: &RawTable, expected: usize, path: &Path) -> Result<()> {
    if table.width() < expected {
        return Err(StandardsError::TooFewColumns {
            path: path.to_path_buf(),
            expected,
            found: table.width(),
        });
    }
    Ok(())
}

/// Trimmed text of a cell; missing cells read as empty.
pub(crate) fn cell_text(row: &[CellValue], idx: usize) -> String {
    row.get(idx).map(CellValue::trimmed).unwrap_or_default()
}
