//! Configuration options for a validation run.

use serde::{Deserialize, Serialize};

/// When the identifier sequence baseline moves to the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SequenceBaseline {
    /// Only rows that pass become the baseline for the next row.
    #[default]
    LastValid,
    /// Every well-formed identifier becomes the baseline, pass or fail.
    AlwaysAdvance,
}

/// How strictly `DATE` columns are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateCheck {
    /// Full `YYYY-MM-DD` date that must equal the date written in `TITLE`.
    #[default]
    MatchTitle,
    /// Format only (`YYYY-MM-DD` or `YYYY-MM`); empty dates pass.
    FormatOnly,
}

/// Options for a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationOptions {
    pub sequence_baseline: SequenceBaseline,
    pub date_check: DateCheck,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sequence_baseline(mut self, baseline: SequenceBaseline) -> Self {
        self.sequence_baseline = baseline;
        self
    }

    pub fn with_date_check(mut self, date_check: DateCheck) -> Self {
        self.date_check = date_check;
        self
    }
}
