//! Authorized personal names.

use std::path::Path;

use catalog_ingest::RawTable;

use crate::error::Result;
use crate::source::{cell_text, read_reference, require_width};
use crate::vocabulary::Vocabulary;

/// Header label some name lists carry in their first cell.
const HEADER_LABEL: &str = "PEOPLE";

/// Load the authorized names: every non-blank cell of the first column.
///
/// The list has no header row of its own, so the first cell counts as a name
/// unless it reads `PEOPLE`.
pub fn load_authorized_names(path: &Path) -> Result<Vocabulary> {
    let table = read_reference(path)?;
    let names = names_from_table(&table, path)?;
    tracing::info!(path = %path.display(), names = names.len(), "loaded authorized names");
    Ok(names)
}

/// Build the name list from an already-read worksheet.
pub fn names_from_table(table: &RawTable, path: &Path) -> Result<Vocabulary> {
    require_width(table, 1, path)?;
    let first = table.headers[0].trim();
    let header_is_name = !first.eq_ignore_ascii_case(HEADER_LABEL) && !is_placeholder(first);

    let leading = header_is_name.then(|| first.to_string());
    let rest = table.rows.iter().map(|row| cell_text(row, 0));
    Ok(Vocabulary::new(leading.into_iter().chain(rest)))
}

/// Positional name given to a blank header cell by the reader.
fn is_placeholder(header: &str) -> bool {
    header
        .strip_prefix("UNNAMED_")
        .is_some_and(|rest| rest.chars().all(|ch| ch.is_ascii_digit()))
}
