//! CSV worksheet reading.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};
use crate::table::{RawTable, normalize_cell};

/// Read a CSV file whose first record is the header row.
///
/// Each record counts as one worksheet row, the header being row 1. Lines
/// with no content at all are not records.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let csv_err = |source| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let mut records = reader.records();
    let Some(header) = records.next() else {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    };
    let header: Vec<String> = header
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (offset, record) in records.enumerate() {
        let record = record.map_err(csv_err)?;
        rows.push((offset + 2, record.iter().map(normalize_cell).collect()));
    }

    tracing::debug!(
        path = %path.display(),
        columns = header.len(),
        rows = rows.len(),
        "read CSV worksheet"
    );
    RawTable::from_records(path, header, rows)
}
