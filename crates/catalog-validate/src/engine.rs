//! Row-by-row validation.

use catalog_model::{CellOutcome, Outcome, Row, Severity};
use tracing::{debug, info, info_span, warn};

use crate::registry::RuleRegistry;
use crate::report::ValidationReport;
use crate::rules::SequenceStates;

/// Applies a [`RuleRegistry`] to rows in order.
///
/// The engine owns the identifier sequencing state, so one engine checks one
/// worksheet; use [`ValidationEngine::reset`] before reusing it.
#[derive(Debug, Clone)]
pub struct ValidationEngine<'a> {
    registry: RuleRegistry<'a>,
    sequences: SequenceStates,
}

impl<'a> ValidationEngine<'a> {
    pub fn new(registry: RuleRegistry<'a>) -> Self {
        Self {
            registry,
            sequences: SequenceStates::new(),
        }
    }

    pub fn registry(&self) -> &RuleRegistry<'a> {
        &self.registry
    }

    /// Forget all sequencing state.
    pub fn reset(&mut self) {
        self.sequences.clear();
    }

    /// Validate every row and collect the outcomes in order.
    pub fn validate(&mut self, rows: &[Row]) -> ValidationReport {
        let _span = info_span!("validate", rows = rows.len()).entered();
        let mut outcomes = Vec::new();
        for row in rows {
            self.validate_row(row, &mut outcomes);
        }
        let report = ValidationReport::new(rows.len(), outcomes);
        info!(
            valid = report.valid_count(),
            hard = report.hard_count(),
            soft = report.soft_count(),
            "validation complete"
        );
        report
    }

    /// Validate one row, appending its outcomes.
    pub fn validate_row(&mut self, row: &Row, outcomes: &mut Vec<CellOutcome>) {
        for (column, rule) in self.registry.iter() {
            if !row.contains(column) {
                continue;
            }
            let outcome = rule
                .evaluate(column, row, &mut self.sequences)
                .unwrap_or_else(|error| Outcome::hard(format!("internal error: {error}")));
            for mirrored in rule.mirrored_columns() {
                if row.contains(mirrored) {
                    push(outcomes, CellOutcome::new(row.spreadsheet_row(), mirrored.as_str(), outcome.clone()));
                }
            }
            push(outcomes, CellOutcome::new(row.spreadsheet_row(), column, outcome));
        }

        for rule in self.registry.locations() {
            if !row.contains(&rule.city_column) {
                continue;
            }
            let mut outcome = rule
                .evaluate(row)
                .unwrap_or_else(|error| Outcome::hard(format!("internal error: {error}")));
            if let Some(target) = outcome.target_column().map(str::to_string)
                && !row.contains(&target)
            {
                outcome = Outcome::hard(format!(
                    "internal error: column '{target}' is not present in the worksheet ({})",
                    outcome.reason().unwrap_or_default()
                ));
            }
            push(outcomes, CellOutcome::new(row.spreadsheet_row(), rule.city_column.as_str(), outcome));
        }
    }
}

fn push(outcomes: &mut Vec<CellOutcome>, outcome: CellOutcome) {
    let row = outcome.row;
    let column = outcome.marked_column();
    match outcome.outcome.severity() {
        None => debug!(row, column, "valid"),
        Some(Severity::Hard) => {
            warn!(row, column, reason = outcome.outcome.reason().unwrap_or_default(), "hard error");
        }
        Some(Severity::Soft) => {
            info!(row, column, reason = outcome.outcome.reason().unwrap_or_default(), "soft error");
        }
    }
    outcomes.push(outcome);
}
