//! Closed-vocabulary rules: one fixed value or a small fixed set.

use std::collections::BTreeSet;

use catalog_model::{CellValue, Outcome};

use super::empty_value;

/// Value must equal one fixed string, or one member of a fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRule {
    label: String,
    allowed: BTreeSet<String>,
}

impl FixedRule {
    /// Exactly one accepted value.
    pub fn one(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            allowed: BTreeSet::from([value.into()]),
        }
    }

    /// Any member of a set.
    pub fn any_of<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            allowed: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn check(&self, cell: &CellValue) -> Outcome {
        if cell.is_blank() {
            return empty_value(&self.label);
        }
        let value = cell.trimmed();
        if self.allowed.contains(&value) {
            return Outcome::Valid;
        }
        match self.single() {
            Some(expected) => Outcome::hard(format!("Expected '{expected}', but got '{value}'")),
            None => Outcome::hard(format!(
                "Invalid {}: '{value}'. Expected one of {}",
                self.label.to_lowercase(),
                self.quoted()
            )),
        }
    }

    fn single(&self) -> Option<&str> {
        if self.allowed.len() == 1 {
            self.allowed.first().map(String::as_str)
        } else {
            None
        }
    }

    fn quoted(&self) -> String {
        self.allowed
            .iter()
            .map(|value| format!("'{value}'"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.label, self.quoted())
    }
}
