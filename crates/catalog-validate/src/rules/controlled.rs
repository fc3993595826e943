//! Controlled-list rules with near-match classification.

use catalog_model::{CellValue, Outcome, split_terms};
use catalog_standards::{TermMatch, Vocabulary};

/// Value (or every `[|]` term, when multi-term) must be in a controlled list.
///
/// An exact match passes. A match that differs only by case or spacing is
/// Hard and names the canonical spelling. Anything else is Soft.
#[derive(Debug, Clone)]
pub struct ControlledRule<'a> {
    label: String,
    vocabulary: &'a Vocabulary,
    accepted: Vec<String>,
    multi_term: bool,
}

impl<'a> ControlledRule<'a> {
    pub fn new(label: impl Into<String>, vocabulary: &'a Vocabulary) -> Self {
        Self {
            label: label.into(),
            vocabulary,
            accepted: Vec::new(),
            multi_term: false,
        }
    }

    /// Also accept a placeholder value outside the list.
    pub fn accepting(mut self, value: impl Into<String>) -> Self {
        self.accepted.push(value.into());
        self
    }

    /// Treat the cell as `[|]`-separated terms.
    pub fn multi_term(mut self) -> Self {
        self.multi_term = true;
        self
    }

    pub fn check(&self, cell: &CellValue) -> Outcome {
        let value = cell.trimmed();
        if self.accepted.iter().any(|accepted| *accepted == value) {
            return Outcome::Valid;
        }
        if self.multi_term {
            self.check_terms(&value)
        } else {
            self.check_single(&value)
        }
    }

    fn check_single(&self, value: &str) -> Outcome {
        match self.vocabulary.classify(value) {
            TermMatch::Exact => Outcome::Valid,
            TermMatch::Near(canonical) => {
                Outcome::hard(format!("Format error: Expected '{canonical}'"))
            }
            TermMatch::Missing => Outcome::soft(format!("{} not found in approved list", self.label)),
        }
    }

    fn check_terms(&self, value: &str) -> Outcome {
        let terms = split_terms(value);
        let mut near = Vec::new();
        let mut missing = Vec::new();
        for term in &terms {
            match self.vocabulary.classify(term) {
                TermMatch::Exact => {}
                TermMatch::Near(canonical) => near.push(format!("'{canonical}'")),
                TermMatch::Missing => missing.push(format!("'{term}'")),
            }
        }
        if !near.is_empty() {
            Outcome::hard(format!("Format error: Expected {}", near.join(", ")))
        } else if !missing.is_empty() {
            Outcome::soft(format!("Terms not found in vocabulary: {}", missing.join(", ")))
        } else {
            Outcome::Valid
        }
    }

    pub fn describe(&self) -> String {
        let mut description = format!("{}: {} controlled terms", self.label, self.vocabulary.len());
        if self.multi_term {
            description.push_str(", [|]-separated");
        }
        if !self.accepted.is_empty() {
            description.push_str(&format!(", also '{}'", self.accepted.join("', '")));
        }
        description
    }
}

#[cfg(test)]
mod tests {
    use catalog_model::Severity;

    use super::*;

    #[test]
    fn classifies_names_three_ways() {
        let names = Vocabulary::new(["Juan Pérez"]);
        let rule = ControlledRule::new("Name", &names);
        assert_eq!(rule.check(&CellValue::text("Juan Pérez")), Outcome::Valid);
        assert_eq!(
            rule.check(&CellValue::text("juan pérez")),
            Outcome::hard("Format error: Expected 'Juan Pérez'")
        );
        assert_eq!(
            rule.check(&CellValue::text("Jane Doe")).severity(),
            Some(Severity::Soft)
        );
    }

    #[test]
    fn accepts_placeholder() {
        let names = Vocabulary::new(["Juan Pérez"]);
        let rule = ControlledRule::new("Name", &names).accepting("Unknown sender");
        assert!(rule.check(&CellValue::text("Unknown sender")).is_valid());
        assert!(!rule.check(&CellValue::text("Unknown recipient")).is_valid());
    }

    #[test]
    fn empty_value_is_not_found() {
        let names = Vocabulary::new(["Juan Pérez"]);
        let rule = ControlledRule::new("Name", &names);
        assert_eq!(rule.check(&CellValue::Empty).severity(), Some(Severity::Soft));
    }

    #[test]
    fn multi_term_prefers_hard() {
        let subjects = Vocabulary::new(["Families", "Commerce"]);
        let rule = ControlledRule::new("Subject", &subjects).multi_term();
        assert!(rule.check(&CellValue::text("Families [|] Commerce")).is_valid());
        assert_eq!(
            rule.check(&CellValue::text("Families[|]Ranching")),
            Outcome::soft("Terms not found in vocabulary: 'Ranching'")
        );
        assert_eq!(
            rule.check(&CellValue::text("families[|]Ranching")),
            Outcome::hard("Format error: Expected 'Families'")
        );
    }
}
