//! Digital identifier format and letter sequencing.
//!
//! Identifiers look like `Ms0004_01_07_03.pdf`: collection, box, folder and
//! letter number. Within one box/folder run the letter numbers must count up
//! from `01` without gaps; a new run must open with letter `01`.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use catalog_model::{CellValue, Outcome};
use catalog_standards::constants::{COLLECTION_NUMBERS, ITEM_EXTENSION};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::options::SequenceBaseline;

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let collections = COLLECTION_NUMBERS
        .iter()
        .map(|collection| regex::escape(collection))
        .collect::<Vec<_>>()
        .join("|");
    let extension = regex::escape(ITEM_EXTENSION);
    Regex::new(&format!(r"^({collections})_(\d{{2}})_(\d{{2}})_(\d{{2}})\.{extension}$"))
        .expect("valid identifier regex")
});

const FORMAT_ERROR: &str = "Incorrect format. Expected 'Ms0004_XX_XX_XX.pdf' or 'Ms0071_XX_XX_XX.pdf' where XX are two-digit numbers";

/// Components of a well-formed digital identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierParts {
    pub collection: String,
    pub box_number: String,
    pub folder: String,
    pub letter: u32,
}

impl IdentifierParts {
    /// Parse a trimmed identifier; `None` when it does not match the format.
    pub fn parse(value: &str) -> Option<Self> {
        let captures = IDENTIFIER_RE.captures(value.trim())?;
        Some(Self {
            collection: captures[1].to_string(),
            box_number: captures[2].to_string(),
            folder: captures[3].to_string(),
            letter: captures[4].parse().ok()?,
        })
    }

    fn box_folder(&self) -> String {
        format!("{}_{}", self.box_number, self.folder)
    }

    fn same_run(&self, other: &Self) -> bool {
        self.collection == other.collection
            && self.box_number == other.box_number
            && self.folder == other.folder
    }
}

/// Result of one sequenced check: the outcome and the state for the next row.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceStep {
    pub outcome: Outcome,
    pub next: Option<IdentifierParts>,
}

/// Per-column sequencing state carried between rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceStates {
    states: BTreeMap<String, Option<IdentifierParts>>,
}

impl SequenceStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline identifier for `column`, if any row has set one.
    pub fn get(&self, column: &str) -> Option<&IdentifierParts> {
        self.states.get(column).and_then(Option::as_ref)
    }

    pub fn set(&mut self, column: &str, state: Option<IdentifierParts>) {
        self.states.insert(column.to_string(), state);
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

/// Identifier format plus sequencing against the previous row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencedRule {
    label: String,
    baseline: SequenceBaseline,
}

impl SequencedRule {
    pub fn new(label: impl Into<String>, baseline: SequenceBaseline) -> Self {
        Self {
            label: label.into(),
            baseline,
        }
    }

    pub fn check(&self, cell: &CellValue, previous: Option<&IdentifierParts>) -> SequenceStep {
        let Some(current) = IdentifierParts::parse(&cell.trimmed()) else {
            return SequenceStep {
                outcome: Outcome::hard(FORMAT_ERROR),
                next: previous.cloned(),
            };
        };
        let outcome = sequence_outcome(&current, previous);
        let advance = match self.baseline {
            SequenceBaseline::LastValid => outcome.is_valid(),
            SequenceBaseline::AlwaysAdvance => true,
        };
        SequenceStep {
            outcome,
            next: if advance { Some(current) } else { previous.cloned() },
        }
    }

    pub fn describe(&self) -> String {
        let baseline = match self.baseline {
            SequenceBaseline::LastValid => "last valid row",
            SequenceBaseline::AlwaysAdvance => "previous row",
        };
        format!("{}: Ms0004/Ms0071_XX_XX_XX.pdf, sequential against {baseline}", self.label)
    }
}

fn sequence_outcome(current: &IdentifierParts, previous: Option<&IdentifierParts>) -> Outcome {
    let Some(previous) = previous else {
        return if current.letter == 1 {
            Outcome::Valid
        } else {
            Outcome::hard("First letter number must start with 01")
        };
    };
    if !current.same_run(previous) {
        if current.letter == 1 {
            return Outcome::Valid;
        }
        return Outcome::hard(format!(
            "Box or folder number mismatch. Expected '{}' but got '{}'",
            previous.box_folder(),
            current.box_folder()
        ));
    }
    let expected = previous.letter + 1;
    if current.letter == expected {
        Outcome::Valid
    } else {
        Outcome::hard(format!(
            "Letter number must increment sequentially. Expected {expected:02} but got {:02}",
            current.letter
        ))
    }
}
