//! Field rules.
//!
//! [`Rule`] has one variant per kind of check. A rule is evaluated with the
//! column it is registered for and the whole row; only cross-field rules
//! read other columns, and only sequenced rules touch the per-column
//! sequence state.

mod controlled;
mod crossfield;
pub mod dates;
mod fixed;
mod location;
mod pattern;
mod sequence;
mod terms;

pub use controlled::ControlledRule;
pub use crossfield::{CrossFieldKind, CrossFieldRule};
pub use fixed::FixedRule;
pub use location::LocationRule;
pub use pattern::{PatternKind, PatternRule};
pub use sequence::{IdentifierParts, SequenceStates, SequenceStep, SequencedRule};
pub use terms::TermListRule;

use catalog_model::{CellValue, Outcome, Row};

use crate::error::{Result, RuleError};

/// A rule registered for one column.
#[derive(Debug, Clone)]
pub enum Rule<'a> {
    /// Value equals a fixed string or one of a small fixed set.
    Fixed(FixedRule),
    /// Regular expression format check.
    Pattern(PatternRule),
    /// `[|]`-separated terms, each from a closed list.
    TermList(TermListRule<'a>),
    /// Controlled list with near-match classification.
    Controlled(ControlledRule<'a>),
    /// Check that reads other columns of the row.
    CrossField(CrossFieldRule<'a>),
    /// Digital identifier format plus sequencing.
    Sequenced(SequencedRule),
}

impl Rule<'_> {
    /// Evaluate the rule for `column` of `row`.
    pub fn evaluate(
        &self,
        column: &str,
        row: &Row,
        sequences: &mut SequenceStates,
    ) -> Result<Outcome> {
        let cell = cell(row, column)?;
        match self {
            Self::Fixed(rule) => Ok(rule.check(cell)),
            Self::Pattern(rule) => rule.check(cell, row),
            Self::TermList(rule) => Ok(rule.check(cell)),
            Self::Controlled(rule) => Ok(rule.check(cell)),
            Self::CrossField(rule) => rule.check(cell, row),
            Self::Sequenced(rule) => {
                let step = rule.check(cell, sequences.get(column));
                sequences.set(column, step.next);
                Ok(step.outcome)
            }
        }
    }

    /// Other columns that receive this rule's outcome as well.
    pub fn mirrored_columns(&self) -> &[String] {
        match self {
            Self::CrossField(rule) => rule.mirrored_columns(),
            _ => &[],
        }
    }

    /// Short name of the rule kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixed",
            Self::Pattern(_) => "pattern",
            Self::TermList(_) => "term list",
            Self::Controlled(_) => "controlled",
            Self::CrossField(_) => "cross-field",
            Self::Sequenced(_) => "sequenced",
        }
    }

    /// One-line description for listings.
    pub fn describe(&self) -> String {
        match self {
            Self::Fixed(rule) => rule.describe(),
            Self::Pattern(rule) => rule.describe(),
            Self::TermList(rule) => rule.describe(),
            Self::Controlled(rule) => rule.describe(),
            Self::CrossField(rule) => rule.describe(),
            Self::Sequenced(rule) => rule.describe(),
        }
    }
}

/// Cell of a column the rule depends on.
pub(crate) fn cell<'r>(row: &'r Row, column: &str) -> Result<&'r CellValue> {
    row.get(column)
        .ok_or_else(|| RuleError::missing_column(column))
}

/// Soft outcome for a blank cell.
pub(crate) fn empty_value(label: &str) -> Outcome {
    Outcome::soft(format!("{label} value is empty or missing."))
}
