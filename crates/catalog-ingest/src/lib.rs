//! Catalog worksheet ingestion.
//!
//! This crate reads a catalog worksheet (CSV or workbook) into a Polars
//! `DataFrame` and projects it into [`catalog_model::Row`]s for validation.
//!
//! # Features
//!
//! - **CSV Loading**: first record is the header row
//! - **Workbook Loading**: `.xlsx`, `.xlsm`, `.xls` via calamine, first or named sheet
//! - **Column Typing**: numeric columns become `Float64`, everything else `String`
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catalog_ingest::load_worksheet;
//!
//! let sheet = load_worksheet(Path::new("Amador.xlsx"), None)?;
//! for row in &sheet.rows {
//!     println!("{}", row.text("DIGITAL_IDENTIFIER"));
//! }
//! ```

mod csv_table;
mod error;
mod frame;
mod table;
mod workbook;

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;

use catalog_model::Row;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv_table::read_csv_table;
pub use table::{RawTable, normalize_cell, normalize_header};
pub use workbook::{data_to_cell, read_workbook_table};

// === DataFrame ===
pub use frame::{frame_rows, table_to_frame};

/// Source format, judged by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Some(Self::Workbook),
            _ => None,
        }
    }
}

/// A loaded worksheet: its typed frame plus the projected rows.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub path: PathBuf,
    /// Sheet the rows came from; `None` for CSV files.
    pub sheet: Option<String>,
    pub frame: DataFrame,
    pub rows: Vec<Row>,
}

impl Worksheet {
    /// Column names in worksheet order.
    pub fn columns(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }
}

/// Read a worksheet into a [`RawTable`], dispatching on the file extension.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    match SourceFormat::from_path(path) {
        Some(SourceFormat::Csv) => read_csv_table(path),
        Some(SourceFormat::Workbook) => read_workbook_table(path, sheet),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Read a worksheet, type it into a DataFrame, and project its rows.
pub fn load_worksheet(path: &Path, sheet: Option<&str>) -> Result<Worksheet> {
    let table = read_table(path, sheet)?;
    let frame = table_to_frame(&table)?;
    let rows = frame_rows(&frame, &table.sheet_rows)?;
    tracing::info!(
        path = %path.display(),
        columns = frame.width(),
        rows = rows.len(),
        "loaded worksheet"
    );
    Ok(Worksheet {
        path: path.to_path_buf(),
        sheet: table.sheet,
        frame,
        rows,
    })
}
