//! Worksheet rows.

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// One data row of the worksheet.
///
/// Cells keep the worksheet's column order. A row is never mutated after it
/// has been read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    index: usize,
    sheet_row: usize,
    cells: Vec<(String, CellValue)>,
}

impl Row {
    /// Create a row from its zero-based data index and ordered cells.
    ///
    /// The worksheet row defaults to `index + 2`, i.e. a sheet without blank
    /// rows below its header.
    pub fn new(index: usize, cells: Vec<(String, CellValue)>) -> Self {
        Self {
            index,
            sheet_row: index + 2,
            cells,
        }
    }

    /// Set the one-based worksheet row the cells were read from.
    #[must_use]
    pub fn with_sheet_row(mut self, sheet_row: usize) -> Self {
        self.sheet_row = sheet_row;
        self
    }

    /// Zero-based index among data rows (header excluded).
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based worksheet row number; the header occupies row 1.
    pub fn spreadsheet_row(&self) -> usize {
        self.sheet_row
    }

    /// Ordered `(column, value)` pairs.
    pub fn cells(&self) -> &[(String, CellValue)] {
        &self.cells
    }

    /// Column names in worksheet order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// True when the worksheet has this column.
    pub fn contains(&self, column: &str) -> bool {
        self.cells.iter().any(|(name, _)| name == column)
    }

    /// Cell for a column, `None` when the column is absent.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Trimmed text of a column; absent columns read as empty.
    pub fn text(&self, column: &str) -> String {
        self.get(column).map(CellValue::trimmed).unwrap_or_default()
    }
}
