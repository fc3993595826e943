//! Workbook (XLSX/XLS) worksheet reading via calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveTime;

use catalog_model::CellValue;

use crate::error::{IngestError, Result};
use crate::table::{RawTable, normalize_cell};

/// Read one worksheet of a workbook; `None` selects the first sheet.
///
/// Cell positions are absolute: the header is always worksheet row 1 even
/// when leading rows or columns are blank.
pub fn read_workbook_table(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    let workbook_err = |message: String| IngestError::WorkbookRead {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_err(e.to_string()))?;
    let names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => names
            .iter()
            .find(|name| name.as_str() == wanted)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                sheet: wanted.to_string(),
                path: path.to_path_buf(),
                available: names.join(", "),
            })?,
        None => names.first().cloned().ok_or_else(|| IngestError::EmptySheet {
            path: path.to_path_buf(),
        })?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| workbook_err(e.to_string()))?;
    let Some((last_row, last_col)) = range.end() else {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    };

    let read_row = |row: u32| -> Vec<CellValue> {
        (0..=last_col)
            .map(|col| {
                range
                    .get_value((row, col))
                    .map(data_to_cell)
                    .unwrap_or_default()
            })
            .collect()
    };

    let header: Vec<String> = read_row(0).iter().map(CellValue::as_text).collect();
    let rows: Vec<(usize, Vec<CellValue>)> = (1..=last_row)
        .map(|row| (row as usize + 1, read_row(row)))
        .collect();

    tracing::debug!(
        path = %path.display(),
        sheet = %name,
        columns = header.len(),
        rows = rows.len(),
        "read workbook worksheet"
    );
    let mut table = RawTable::from_records(path, header, rows)?;
    table.sheet = Some(name);
    Ok(table)
}

/// Convert a calamine cell to a [`CellValue`].
///
/// Date cells become ISO text (`1898-03-04`, with a time part only when it
/// is not midnight).
pub fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => normalize_cell(s),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::text(if *b { "TRUE" } else { "FALSE" }),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) if value.time() == NaiveTime::MIN => {
                CellValue::text(value.format("%Y-%m-%d").to_string())
            }
            Some(value) => CellValue::text(value.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => normalize_cell(s),
        other => CellValue::text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_scalar_cells() {
        assert_eq!(data_to_cell(&Data::Empty), CellValue::Empty);
        assert_eq!(data_to_cell(&Data::Int(1898)), CellValue::Number(1898.0));
        assert_eq!(
            data_to_cell(&Data::String("Ms0004".to_string())),
            CellValue::text("Ms0004")
        );
        assert_eq!(data_to_cell(&Data::Bool(true)), CellValue::text("TRUE"));
    }
}
