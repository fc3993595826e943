//! DataFrame conversion for worksheets.
//!
//! A column becomes `Float64` when every non-blank cell was stored as a number
//! (workbook numeric cells), otherwise `String`. Text that merely looks
//! numeric, such as `04` in a CSV file, stays text. Rows are projected back
//! out of the frame in worksheet order.

use polars::prelude::{Column, DataFrame};

use catalog_model::{CellValue, Row, any_to_cell};

use crate::error::Result;
use crate::table::RawTable;

/// Build a DataFrame from a raw table.
pub fn table_to_frame(table: &RawTable) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(table.width());
    for (idx, header) in table.headers.iter().enumerate() {
        let cells: Vec<&CellValue> = table
            .rows
            .iter()
            .map(|row| row.get(idx).unwrap_or(&CellValue::Empty))
            .collect();
        columns.push(build_column(header, &cells));
    }
    Ok(DataFrame::new(columns)?)
}

fn build_column(name: &str, cells: &[&CellValue]) -> Column {
    if is_numeric_column(cells) {
        let values: Vec<Option<f64>> = cells.iter().map(|cell| numeric_value(cell)).collect();
        Column::new(name.into(), values)
    } else {
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|cell| match cell {
                CellValue::Empty => None,
                other => Some(other.as_text()),
            })
            .collect();
        Column::new(name.into(), values)
    }
}

fn numeric_value(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(_) | CellValue::Empty => None,
    }
}

/// True when the column has at least one value and every non-blank value is a number.
fn is_numeric_column(cells: &[&CellValue]) -> bool {
    let mut non_blank = 0usize;
    for cell in cells {
        if cell.is_blank() {
            continue;
        }
        non_blank += 1;
        if numeric_value(cell).is_none() {
            return false;
        }
    }
    non_blank > 0
}

/// Project every DataFrame row into a [`Row`], in order.
///
/// `sheet_rows` gives the one-based worksheet row of each frame row; rows
/// past its end fall back to the position below the header.
pub fn frame_rows(df: &DataFrame, sheet_rows: &[usize]) -> Result<Vec<Row>> {
    let columns = df.get_columns();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            let value = any_to_cell(column.get(idx)?);
            cells.push((column.name().to_string(), value));
        }
        let row = Row::new(idx, cells);
        rows.push(match sheet_rows.get(idx) {
            Some(sheet_row) => row.with_sheet_row(*sheet_row),
            None => row,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use polars::prelude::DataType;

    use super::*;

    fn table() -> RawTable {
        RawTable::from_records(
            Path::new("sheet.csv"),
            vec!["YEAR".into(), "TITLE".into(), "MIXED".into()],
            vec![
                (
                    2,
                    vec![
                        CellValue::Number(1898.0),
                        CellValue::text("Letter"),
                        CellValue::text("12"),
                    ],
                ),
                (
                    4,
                    vec![
                        CellValue::Number(1899.0),
                        CellValue::Empty,
                        CellValue::Number(7.0),
                    ],
                ),
            ],
        )
        .expect("table")
    }

    #[test]
    fn types_columns_by_content() {
        let df = table_to_frame(&table()).expect("frame");
        assert_eq!(df.column("YEAR").expect("YEAR").dtype(), &DataType::Float64);
        assert_eq!(df.column("TITLE").expect("TITLE").dtype(), &DataType::String);
        assert_eq!(df.column("MIXED").expect("MIXED").dtype(), &DataType::String);
    }

    #[test]
    fn rows_round_trip_in_order() {
        let df = table_to_frame(&table()).expect("frame");
        let table = table();
        let rows = frame_rows(&df, &table.sheet_rows).expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index(), 0);
        assert_eq!(rows[0].text("YEAR"), "1898");
        assert_eq!(rows[1].get("TITLE"), Some(&CellValue::Empty));
        assert_eq!(rows[1].text("MIXED"), "7");
        assert_eq!(rows[1].spreadsheet_row(), 4);
    }

    #[test]
    fn numeric_looking_text_stays_text() {
        let cells = [&CellValue::text("04"), &CellValue::text("1")];
        assert!(!is_numeric_column(&cells));
        let column = build_column("OA_METADATA_SCHEMA", &cells);
        assert_eq!(column.dtype(), &DataType::String);
        assert_eq!(any_to_cell(column.get(0).expect("cell")), CellValue::text("04"));
    }
}
