//! Multi-term closed-list rules.

use std::collections::BTreeSet;

use catalog_model::{CellValue, Outcome, split_terms};

use super::empty_value;

/// Every `[|]`-separated term must belong to a closed list.
#[derive(Debug, Clone)]
pub struct TermListRule<'a> {
    label: String,
    allowed: &'a BTreeSet<String>,
}

impl<'a> TermListRule<'a> {
    pub fn new(label: impl Into<String>, allowed: &'a BTreeSet<String>) -> Self {
        Self {
            label: label.into(),
            allowed,
        }
    }

    pub fn check(&self, cell: &CellValue) -> Outcome {
        if cell.is_blank() {
            return empty_value(&self.label);
        }
        let terms = split_terms(&cell.trimmed());
        let invalid: Vec<&str> = terms
            .iter()
            .map(String::as_str)
            .filter(|term| !self.allowed.contains(*term))
            .collect();
        if invalid.is_empty() {
            Outcome::Valid
        } else {
            Outcome::hard(format!(
                "Invalid {} terms: {}",
                self.label.to_lowercase(),
                invalid.join(", ")
            ))
        }
    }

    pub fn describe(&self) -> String {
        format!("{}: {} allowed terms", self.label, self.allowed.len())
    }
}
