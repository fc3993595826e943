//! Controlled lists with near-match lookup.

use std::collections::{BTreeMap, BTreeSet};

/// How a value relates to a controlled list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermMatch<'a> {
    /// Present exactly as written.
    Exact,
    /// Present after case folding and whitespace collapsing; carries the canonical spelling.
    Near(&'a str),
    /// Not present.
    Missing,
}

/// An immutable controlled list.
///
/// Terms are stored trimmed. A folded index (lowercase, inner whitespace
/// collapsed) maps back to the first canonical spelling seen for each key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: BTreeSet<String>,
    folded: BTreeMap<String, String>,
}

impl Vocabulary {
    /// Build a list from terms in source order; blank terms are dropped.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        for term in terms {
            vocabulary.insert(term.as_ref());
        }
        vocabulary
    }

    fn insert(&mut self, raw: &str) {
        let term = raw.trim();
        if term.is_empty() {
            return;
        }
        self.folded
            .entry(fold(term))
            .or_insert_with(|| term.to_string());
        self.terms.insert(term.to_string());
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Exact membership of a trimmed value.
    pub fn contains(&self, value: &str) -> bool {
        self.terms.contains(value.trim())
    }

    /// Classify a value as exact, near, or missing.
    pub fn classify(&self, value: &str) -> TermMatch<'_> {
        let value = value.trim();
        if self.terms.contains(value) {
            return TermMatch::Exact;
        }
        match self.folded.get(&fold(value)) {
            Some(canonical) => TermMatch::Near(canonical),
            None => TermMatch::Missing,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

/// Lowercase and collapse runs of whitespace to one space.
pub fn fold(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_way_classification() {
        let names = Vocabulary::new(["Juan Pérez", "María Amador"]);
        assert_eq!(names.classify("Juan Pérez"), TermMatch::Exact);
        assert_eq!(names.classify("juan  pérez"), TermMatch::Near("Juan Pérez"));
        assert_eq!(names.classify("Jane Doe"), TermMatch::Missing);
    }

    #[test]
    fn trims_and_skips_blanks() {
        let vocabulary = Vocabulary::new([" Miscellaneous, 1868-1944 ", "", "   "]);
        assert_eq!(vocabulary.len(), 1);
        assert!(vocabulary.contains("Miscellaneous, 1868-1944"));
    }

    #[test]
    fn first_spelling_is_canonical() {
        let vocabulary = Vocabulary::new(["El Paso", "EL PASO"]);
        assert_eq!(vocabulary.classify("el paso"), TermMatch::Near("El Paso"));
        assert_eq!(vocabulary.classify("EL PASO"), TermMatch::Exact);
    }
}
