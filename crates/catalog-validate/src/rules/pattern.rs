//! Regular-expression format rules.

use std::sync::LazyLock;

use catalog_model::columns::BOX_FOLDER;
use catalog_model::{CellValue, Language, Outcome, Row};
use regex::Regex;

use super::empty_value;
use super::sequence::IdentifierParts;
use crate::error::Result;

static BOX_FOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}_\d{2}$").expect("valid box folder regex"));

static CATALOGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+, [A-Za-z]+$").expect("valid cataloger regex"));

static EXTENT_EN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+) (leaf|leaves) \[(\d+) (page|pages)\]$").expect("valid extent regex")
});

static EXTENT_ES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+) (hoja|hojas) \[(\d+) (página|páginas)\]$").expect("valid extent regex")
});

/// What a [`PatternRule`] checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternKind {
    /// `XX_XX`, and equal to the box and folder of the row's identifier.
    BoxFolder { identifier_column: String },
    /// `LastName, FirstName`.
    Cataloger,
    /// `N leaf [N pages]` in the given language.
    Extent(Language),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    label: String,
    kind: PatternKind,
}

impl PatternRule {
    pub fn new(label: impl Into<String>, kind: PatternKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    pub fn check(&self, cell: &CellValue, row: &Row) -> Result<Outcome> {
        let outcome = match &self.kind {
            PatternKind::BoxFolder { identifier_column } => {
                check_box_folder(cell, row, identifier_column)
            }
            PatternKind::Cataloger => self.check_cataloger(cell),
            PatternKind::Extent(language) => self.check_extent(cell, *language),
        };
        Ok(outcome)
    }

    fn check_cataloger(&self, cell: &CellValue) -> Outcome {
        if cell.is_blank() {
            return empty_value(&self.label);
        }
        let value = cell.trimmed();
        if CATALOGER_RE.is_match(&value) {
            Outcome::Valid
        } else {
            Outcome::hard(format!(
                "Invalid format: '{value}'. Expected 'LastName, FirstName'."
            ))
        }
    }

    fn check_extent(&self, cell: &CellValue, language: Language) -> Outcome {
        if cell.is_blank() {
            return empty_value(&self.label);
        }
        let value = cell.trimmed();
        let regex = match language {
            Language::English => &*EXTENT_EN_RE,
            Language::Spanish => &*EXTENT_ES_RE,
        };
        let Some(captures) = regex.captures(&value) else {
            return Outcome::hard(format!("Invalid format for EXTENT value: '{value}'"));
        };
        let (leaves, pages) = match language {
            Language::English => (("leaf", "leaves"), ("page", "pages")),
            Language::Spanish => (("hoja", "hojas"), ("página", "páginas")),
        };
        let pairs = [(&captures[1], &captures[2], leaves), (&captures[3], &captures[4], pages)];
        for (count, unit, (singular, plural)) in pairs {
            // Counts longer than u64 are certainly plural.
            let count_is_one = count.parse::<u64>().is_ok_and(|n| n == 1);
            if count_is_one && unit != singular {
                return Outcome::hard(format!("Incorrect singular form: {unit} for {count}."));
            }
            if !count_is_one && unit != plural {
                return Outcome::hard(format!("Incorrect plural form: {unit} for {count}."));
            }
        }
        Outcome::Valid
    }

    pub fn describe(&self) -> String {
        match &self.kind {
            PatternKind::BoxFolder { identifier_column } => {
                format!("{}: XX_XX matching {identifier_column}", self.label)
            }
            PatternKind::Cataloger => format!("{}: 'LastName, FirstName'", self.label),
            PatternKind::Extent(Language::English) => {
                format!("{}: 'N leaf/leaves [N page/pages]'", self.label)
            }
            PatternKind::Extent(Language::Spanish) => {
                format!("{}: 'N hoja/hojas [N página/páginas]'", self.label)
            }
        }
    }
}

fn check_box_folder(cell: &CellValue, row: &Row, identifier_column: &str) -> Outcome {
    let value = cell.trimmed();
    if !BOX_FOLDER_RE.is_match(&value) {
        return Outcome::hard(
            "Box Folder format is incorrect, expected 'XX_XX' with two digits before and after the underscore",
        );
    }
    let identifier = row.text(identifier_column);
    let Some(parts) = IdentifierParts::parse(&identifier) else {
        return Outcome::Valid;
    };
    if value == format!("{}_{}", parts.box_number, parts.folder) {
        Outcome::Valid
    } else {
        Outcome::hard(format!(
            "{} '{value}' does not match {identifier_column} box '{}' and folder '{}'.",
            box_folder_column(identifier_column),
            parts.box_number,
            parts.folder
        ))
    }
}

fn box_folder_column(identifier_column: &str) -> String {
    Language::of_column(identifier_column).column(BOX_FOLDER)
}

#[cfg(test)]
mod tests {
    use catalog_model::Severity;
    use catalog_model::columns::DIGITAL_IDENTIFIER;

    use super::*;

    fn make_row(cells: &[(&str, &str)]) -> Row {
        Row::new(
            0,
            cells
                .iter()
                .map(|(column, value)| (column.to_string(), CellValue::text(*value)))
                .collect(),
        )
    }

    fn box_folder() -> PatternRule {
        PatternRule::new(
            "Box folder",
            PatternKind::BoxFolder {
                identifier_column: DIGITAL_IDENTIFIER.to_string(),
            },
        )
    }

    #[test]
    fn box_folder_matches_identifier() {
        let row = make_row(&[(BOX_FOLDER, "01_07"), (DIGITAL_IDENTIFIER, "Ms0004_01_07_01.pdf")]);
        let outcome = box_folder().check(&CellValue::text("01_07"), &row).unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn box_folder_mismatch_names_both_columns() {
        let row = make_row(&[(BOX_FOLDER, "01_08"), (DIGITAL_IDENTIFIER, "Ms0004_01_07_01.pdf")]);
        let outcome = box_folder().check(&CellValue::text("01_08"), &row).unwrap();
        assert_eq!(
            outcome,
            Outcome::hard(
                "BOX_FOLDER '01_08' does not match DIGITAL_IDENTIFIER box '01' and folder '07'."
            )
        );
    }

    #[test]
    fn box_folder_format_only_without_identifier() {
        let row = make_row(&[(BOX_FOLDER, "1_7")]);
        let outcome = box_folder().check(&CellValue::text("1_7"), &row).unwrap();
        assert_eq!(outcome.severity(), Some(Severity::Hard));
        let row = row_with_bad_identifier();
        assert!(box_folder().check(&CellValue::text("02_03"), &row).unwrap().is_valid());
    }

    fn row_with_bad_identifier() -> Row {
        make_row(&[(BOX_FOLDER, "02_03"), (DIGITAL_IDENTIFIER, "garbage")])
    }

    #[test]
    fn cataloger_format() {
        let rule = PatternRule::new("Cataloger", PatternKind::Cataloger);
        let empty = Row::new(0, Vec::new());
        assert!(rule.check(&CellValue::text("Smith, Jane"), &empty).unwrap().is_valid());
        assert_eq!(
            rule.check(&CellValue::text("Jane Smith"), &empty).unwrap(),
            Outcome::hard("Invalid format: 'Jane Smith'. Expected 'LastName, FirstName'.")
        );
        assert_eq!(
            rule.check(&CellValue::Empty, &empty).unwrap().severity(),
            Some(Severity::Soft)
        );
    }

    #[test]
    fn extent_agreement() {
        let english = PatternRule::new("Extent", PatternKind::Extent(Language::English));
        let spanish = PatternRule::new("Extent", PatternKind::Extent(Language::Spanish));
        let empty = Row::new(0, Vec::new());
        let check = |rule: &PatternRule, value: &str| {
            rule.check(&CellValue::text(value), &empty).unwrap()
        };

        assert!(check(&english, "1 leaf [2 pages]").is_valid());
        assert!(check(&english, "3 leaves [1 page]").is_valid());
        assert!(check(&spanish, "2 hojas [3 páginas]").is_valid());
        assert_eq!(
            check(&english, "1 leaves [2 pages]"),
            Outcome::hard("Incorrect singular form: leaves for 1.")
        );
        assert_eq!(
            check(&spanish, "1 hoja [2 página]"),
            Outcome::hard("Incorrect plural form: página for 2.")
        );
        assert_eq!(
            check(&english, "1 hoja [2 páginas]"),
            Outcome::hard("Invalid format for EXTENT value: '1 hoja [2 páginas]'")
        );
    }
}
