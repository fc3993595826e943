//! Raw worksheet tables.
//!
//! A [`RawTable`] is the worksheet exactly as read: the header row plus data
//! rows of [`CellValue`]s, before any column typing happens.

use std::collections::BTreeSet;
use std::path::Path;

use catalog_model::CellValue;

use crate::error::{IngestError, Result};

/// Header plus data rows of one worksheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// One-based worksheet row of each entry in `rows`.
    pub sheet_rows: Vec<usize>,
    /// Source sheet name; `None` for CSV files.
    pub sheet: Option<String>,
}

impl RawTable {
    /// Build a table from a header row and data rows, each tagged with its
    /// one-based worksheet row.
    ///
    /// Headers are normalized, blank headers get a positional name, and every
    /// data row is padded or cut to the header width. Fully blank rows are
    /// dropped; the rows after them keep their own worksheet row numbers.
    pub fn from_records(
        path: &Path,
        header: Vec<String>,
        records: impl IntoIterator<Item = (usize, Vec<CellValue>)>,
    ) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let mut headers = Vec::with_capacity(header.len());
        for (idx, raw) in header.iter().enumerate() {
            let mut name = normalize_header(raw);
            if name.is_empty() {
                name = format!("UNNAMED_{}", idx + 1);
            }
            if !seen.insert(name.clone()) {
                return Err(IngestError::DuplicateColumn {
                    column: name,
                    path: path.to_path_buf(),
                });
            }
            headers.push(name);
        }

        let width = headers.len();
        let mut rows = Vec::new();
        let mut sheet_rows = Vec::new();
        for (sheet_row, mut record) in records {
            if record.iter().all(CellValue::is_blank) {
                continue;
            }
            record.resize(width, CellValue::Empty);
            rows.push(record);
            sheet_rows.push(sheet_row);
        }

        Ok(Self {
            headers,
            rows,
            sheet_rows,
            sheet: None,
        })
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Trim a header cell, drop a byte-order mark and collapse inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert a raw text cell; only a byte-order mark is removed.
pub fn normalize_cell(raw: &str) -> CellValue {
    CellValue::text(raw.trim_matches('\u{feff}'))
}
