//! Marked workbook writer.
//!
//! Every input cell is written back unchanged. Marked cells get a solid
//! fill: red for Hard errors, yellow for Soft ones. When a cell is marked
//! more than once the Hard fill wins.

use std::collections::BTreeMap;
use std::path::Path;

use catalog_model::{CellValue, Row, Severity};
use catalog_validate::MarkingSink;
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook, XlsxError};

use crate::error::{OutputError, Result};

/// Fill for Hard errors.
pub const HARD_FILL: u32 = 0xFF0000;
/// Fill for Soft errors.
pub const SOFT_FILL: u32 = 0xFFFF00;

/// Sheet name of the marked workbook when the source has none (CSV input).
pub const SHEET_NAME: &str = "Verified";

/// Collects markings for one worksheet and writes it as `.xlsx`.
#[derive(Debug, Clone)]
pub struct MarkedWorkbook<'a> {
    sheet_name: &'a str,
    columns: &'a [String],
    rows: &'a [Row],
    marks: BTreeMap<(usize, usize), Severity>,
    unknown: usize,
}

impl<'a> MarkedWorkbook<'a> {
    pub fn new(columns: &'a [String], rows: &'a [Row]) -> Self {
        Self {
            sheet_name: SHEET_NAME,
            columns,
            rows,
            marks: BTreeMap::new(),
            unknown: 0,
        }
    }

    /// Name the sheet after the source worksheet.
    #[must_use]
    pub fn with_sheet_name(mut self, sheet_name: &'a str) -> Self {
        self.sheet_name = sheet_name;
        self
    }

    /// Severity recorded for a worksheet cell.
    pub fn severity_at(&self, row: usize, column: &str) -> Option<Severity> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.marks.get(&(row, index)).copied()
    }

    pub fn marked_cells(&self) -> usize {
        self.marks.len()
    }

    /// Write the workbook to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let wrap = |source: XlsxError| OutputError::Workbook {
            path: path.to_path_buf(),
            source,
        };
        let hard = fill(HARD_FILL);
        let soft = fill(SOFT_FILL);

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(self.sheet_name).map_err(wrap)?;

        for (index, column) in self.columns.iter().enumerate() {
            sheet.write_string(0, column_number(index)?, column).map_err(wrap)?;
        }

        for row in self.rows {
            let sheet_row = row_number(row.spreadsheet_row())?;
            for (index, column) in self.columns.iter().enumerate() {
                let col = column_number(index)?;
                let value = row.get(column).cloned().unwrap_or_default();
                let format = match self.marks.get(&(row.spreadsheet_row(), index)) {
                    Some(Severity::Hard) => Some(&hard),
                    Some(Severity::Soft) => Some(&soft),
                    None => None,
                };
                match (value, format) {
                    (CellValue::Empty, None) => {}
                    (CellValue::Empty, Some(format)) => {
                        sheet.write_blank(sheet_row, col, format).map_err(wrap)?;
                    }
                    (CellValue::Text(text), None) => {
                        sheet.write_string(sheet_row, col, text).map_err(wrap)?;
                    }
                    (CellValue::Text(text), Some(format)) => {
                        sheet
                            .write_string_with_format(sheet_row, col, text, format)
                            .map_err(wrap)?;
                    }
                    (CellValue::Number(number), None) => {
                        sheet.write_number(sheet_row, col, number).map_err(wrap)?;
                    }
                    (CellValue::Number(number), Some(format)) => {
                        sheet
                            .write_number_with_format(sheet_row, col, number, format)
                            .map_err(wrap)?;
                    }
                }
            }
        }

        workbook.save(path).map_err(wrap)?;
        tracing::info!(
            path = %path.display(),
            marked = self.marks.len(),
            "wrote marked workbook"
        );
        if self.unknown > 0 {
            tracing::warn!(count = self.unknown, "markings named columns not in the worksheet");
        }
        Ok(())
    }
}

impl MarkingSink for MarkedWorkbook<'_> {
    fn mark(&mut self, row: usize, column: &str, severity: Severity) {
        let Some(index) = self.columns.iter().position(|c| c == column) else {
            self.unknown += 1;
            return;
        };
        self.marks
            .entry((row, index))
            .and_modify(|existing| {
                if severity == Severity::Hard {
                    *existing = Severity::Hard;
                }
            })
            .or_insert(severity);
    }
}

fn fill(rgb: u32) -> Format {
    Format::new()
        .set_background_color(Color::RGB(rgb))
        .set_pattern(FormatPattern::Solid)
}

/// Zero-based workbook row for a one-based worksheet row number.
fn row_number(row: usize) -> Result<u32> {
    row.checked_sub(1)
        .and_then(|row| u32::try_from(row).ok())
        .ok_or_else(|| OutputError::TooLarge {
            message: format!("row {row}"),
        })
}

fn column_number(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| OutputError::TooLarge {
        message: format!("{} columns", index + 1),
    })
}
