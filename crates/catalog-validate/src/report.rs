//! Validation report and outcome projection.

use std::collections::BTreeMap;

use catalog_model::{CellOutcome, Severity};
use serde::{Deserialize, Serialize};

/// A cell to mark in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marking {
    /// Worksheet row number; the header is row 1.
    pub row: usize,
    pub column: String,
    pub severity: Severity,
}

/// Marking for a failed outcome; `None` for a passing one.
pub fn project(outcome: &CellOutcome) -> Option<Marking> {
    outcome.outcome.severity().map(|severity| Marking {
        row: outcome.row,
        column: outcome.marked_column().to_string(),
        severity,
    })
}

/// Destination for cell markings.
pub trait MarkingSink {
    fn mark(&mut self, row: usize, column: &str, severity: Severity);
}

/// Send every marking of `report` to `sink`; returns how many were sent.
pub fn apply_markings(report: &ValidationReport, sink: &mut impl MarkingSink) -> usize {
    let mut count = 0;
    for marking in report.markings() {
        sink.mark(marking.row, &marking.column, marking.severity);
        count += 1;
    }
    count
}

/// Sink that keeps markings in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub markings: Vec<Marking>,
}

impl MarkingSink for RecordingSink {
    fn mark(&mut self, row: usize, column: &str, severity: Severity) {
        self.markings.push(Marking {
            row,
            column: column.to_string(),
            severity,
        });
    }
}

/// Outcome counts for one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub valid: usize,
    pub hard: usize,
    pub soft: usize,
}

impl ColumnSummary {
    pub fn total(&self) -> usize {
        self.valid + self.hard + self.soft
    }

    fn record(&mut self, severity: Option<Severity>) {
        match severity {
            None => self.valid += 1,
            Some(Severity::Hard) => self.hard += 1,
            Some(Severity::Soft) => self.soft += 1,
        }
    }
}

/// Ordered outcomes of one validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of data rows read.
    pub rows: usize,
    pub outcomes: Vec<CellOutcome>,
}

impl ValidationReport {
    pub fn new(rows: usize, outcomes: Vec<CellOutcome>) -> Self {
        Self { rows, outcomes }
    }

    pub fn markings(&self) -> impl Iterator<Item = Marking> + '_ {
        self.outcomes.iter().filter_map(project)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.outcome.severity() == Some(severity))
            .count()
    }

    pub fn hard_count(&self) -> usize {
        self.count(Severity::Hard)
    }

    pub fn soft_count(&self) -> usize {
        self.count(Severity::Soft)
    }

    pub fn valid_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.outcome.is_valid())
            .count()
    }

    pub fn has_hard(&self) -> bool {
        self.hard_count() > 0
    }

    /// Counts per marked column, in column-name order.
    pub fn by_column(&self) -> BTreeMap<String, ColumnSummary> {
        let mut summary: BTreeMap<String, ColumnSummary> = BTreeMap::new();
        for outcome in &self.outcomes {
            summary
                .entry(outcome.marked_column().to_string())
                .or_default()
                .record(outcome.outcome.severity());
        }
        summary
    }
}
