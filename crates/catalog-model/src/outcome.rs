//! Validation outcomes.
//!
//! Every evaluated cell yields exactly one [`Outcome`]. Failures carry a
//! [`Severity`], a human-readable reason and, for rules that inspect
//! several columns, the column the failure belongs to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Definite error: wrong format, value outside a closed list.
    Hard,
    /// Needs review: unknown value, possible discrepancy.
    Soft,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hard => "Hard",
            Self::Soft => "Soft",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of evaluating one rule against one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Valid,
    Invalid {
        severity: Severity,
        reason: String,
        /// Column to mark instead of the evaluated one.
        target_column: Option<String>,
    },
}

impl Outcome {
    /// Hard failure on the evaluated column.
    pub fn hard(reason: impl Into<String>) -> Self {
        Self::Invalid {
            severity: Severity::Hard,
            reason: reason.into(),
            target_column: None,
        }
    }

    /// Soft failure on the evaluated column.
    pub fn soft(reason: impl Into<String>) -> Self {
        Self::Invalid {
            severity: Severity::Soft,
            reason: reason.into(),
            target_column: None,
        }
    }

    /// Redirect a failure to another column. `Valid` is returned unchanged.
    pub fn on_column(self, column: impl Into<String>) -> Self {
        match self {
            Self::Valid => Self::Valid,
            Self::Invalid {
                severity, reason, ..
            } => Self::Invalid {
                severity,
                reason,
                target_column: Some(column.into()),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Severity of a failure, `None` when valid.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Valid => None,
            Self::Invalid { severity, .. } => Some(*severity),
        }
    }

    /// Failure reason, `None` when valid.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { reason, .. } => Some(reason),
        }
    }

    pub fn target_column(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { target_column, .. } => target_column.as_deref(),
        }
    }
}

/// An outcome bound to its worksheet position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOutcome {
    /// One-based worksheet row number.
    pub row: usize,
    /// Column the rule was registered for.
    pub column: String,
    pub outcome: Outcome,
}

impl CellOutcome {
    pub fn new(row: usize, column: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            row,
            column: column.into(),
            outcome,
        }
    }

    /// Column that carries the result: the redirect target if any.
    pub fn marked_column(&self) -> &str {
        self.outcome.target_column().unwrap_or(&self.column)
    }
}

impl fmt::Display for CellOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Valid => write!(f, "Row {}, {}: Valid", self.row, self.column),
            Outcome::Invalid {
                severity, reason, ..
            } => write!(
                f,
                "Row {}, {}: {} error. {}",
                self.row,
                self.marked_column(),
                severity,
                reason
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Hard.label(), "Hard");
        assert_eq!(Severity::Soft.label(), "Soft");
    }

    #[test]
    fn redirect_keeps_valid() {
        assert_eq!(Outcome::Valid.on_column("X"), Outcome::Valid);
        let redirected = Outcome::hard("bad").on_column("SENDERS_STATE");
        assert_eq!(redirected.target_column(), Some("SENDERS_STATE"));
        assert_eq!(redirected.severity(), Some(Severity::Hard));
    }

    #[test]
    fn marked_column_prefers_target() {
        let cell = CellOutcome::new(
            3,
            "SENDERS_CITY",
            Outcome::hard("mismatch").on_column("SENDERS_STATE"),
        );
        assert_eq!(cell.marked_column(), "SENDERS_STATE");
        let plain = CellOutcome::new(3, "DATE", Outcome::Valid);
        assert_eq!(plain.marked_column(), "DATE");
    }
}
