//! Scalar cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::polars::format_numeric;

/// Delimiter between multiple terms stored in a single cell.
pub const TERM_SEPARATOR: &str = "[|]";

/// Placeholder meaning "intentionally absent".
///
/// Treated the same as an empty cell wherever a rule skips blanks.
pub const NO_DATA_SENTINEL: &str = "no data";

/// A single worksheet cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Blank or missing cell.
    #[default]
    Empty,
    /// Text cell (stored untrimmed, exactly as read).
    Text(String),
    /// Numeric cell.
    Number(f64),
}

impl CellValue {
    /// Build a text value, mapping the empty string to [`CellValue::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) => false,
        }
    }

    /// True for blank cells and the `no data` sentinel (case-insensitive).
    pub fn is_absent(&self) -> bool {
        self.is_blank() || self.trimmed().eq_ignore_ascii_case(NO_DATA_SENTINEL)
    }

    /// Text rendering of the cell; numbers are rendered without trailing zeros.
    pub fn as_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(number) => format_numeric(*number),
        }
    }

    /// Trimmed text rendering of the cell.
    pub fn trimmed(&self) -> String {
        match self {
            Self::Text(text) => text.trim().to_string(),
            other => other.as_text(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Split a cell on [`TERM_SEPARATOR`], trimming every term.
///
/// An empty input yields a single empty term, so callers see the same
/// number of pieces the separator produced.
pub fn split_terms(value: &str) -> Vec<String> {
    value
        .split(TERM_SEPARATOR)
        .map(|term| term.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_absent() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::text("   ").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(CellValue::text(" No Data ").is_absent());
        assert!(!CellValue::text("Springer").is_absent());
    }

    #[test]
    fn numbers_render_without_trailing_zeros() {
        assert_eq!(CellValue::Number(1898.0).as_text(), "1898");
        assert_eq!(CellValue::Number(10317.0).trimmed(), "10317");
        assert_eq!(CellValue::Number(2.50).as_text(), "2.5");
    }

    #[test]
    fn split_terms_trims_each_piece() {
        assert_eq!(
            split_terms("Familia [|] Amigos"),
            vec!["Familia".to_string(), "Amigos".to_string()]
        );
        assert_eq!(split_terms(""), vec![String::new()]);
    }
}
