//! Data model types for catalog verification.
//!
//! This crate provides the shared vocabulary used by every stage of the
//! verifier:
//!
//! - [`value`]: Scalar cell values read from a worksheet
//! - [`row`]: An ordered, immutable view of one worksheet row
//! - [`outcome`]: Validation outcomes and severities
//! - [`language`]: The two catalog languages (English, Spanish)
//! - [`columns`]: Column names of the catalog worksheet
//! - [`polars`]: Polars `AnyValue` conversion helpers

pub mod columns;
pub mod language;
pub mod outcome;
pub mod polars;
pub mod row;
pub mod value;

pub use language::Language;
pub use outcome::{CellOutcome, Outcome, Severity};
pub use polars::{any_to_cell, format_numeric};
pub use row::Row;
pub use value::{CellValue, NO_DATA_SENTINEL, TERM_SEPARATOR, split_terms};
