//! Per-cell rule errors.
//!
//! A [`RuleError`] never aborts a run: the engine turns it into a Hard
//! outcome on the cell that was being evaluated.

use thiserror::Error;

/// Failure of a rule to produce an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// A column the rule reads is not in the worksheet.
    #[error("column '{column}' is not present in the worksheet")]
    MissingColumn { column: String },

    /// A pattern built at evaluation time failed to compile.
    #[error("invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

impl RuleError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }
}

/// Result type for rule evaluation.
pub type Result<T> = std::result::Result<T, RuleError>;
