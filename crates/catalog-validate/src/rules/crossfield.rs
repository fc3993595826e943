//! Rules that read other columns of the same row.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use catalog_model::{CellValue, Language, Outcome, Row, split_terms};
use catalog_standards::constants::ITEM_EXTENSION;
use catalog_standards::{Gazetteer, RelationshipTaxonomy};
use regex::Regex;

use super::dates::{DateFormat, date_from_title, parse_date};
use super::{cell, empty_value};
use crate::error::{Result, RuleError};
use crate::options::DateCheck;

static PLACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}[\p{L}\s'.-]* \((?:\p{L}+\.)+\)$").expect("valid place regex")
});

/// What a [`CrossFieldRule`] compares.
#[derive(Debug, Clone)]
pub enum CrossFieldKind<'a> {
    /// `YEAR` is four digits and equals the year of the paired date column.
    YearDate { date_column: String },
    /// `DATE` format, and under [`DateCheck::MatchTitle`] equality with the
    /// date written in the title.
    DateTitle {
        title_column: String,
        date_check: DateCheck,
    },
    /// `RELATIONSHIP1` terms and the `RELATIONSHIP2` term paired with them.
    Relationship {
        first_column: String,
        second_column: String,
        language: Language,
        taxonomy: &'a RelationshipTaxonomy,
    },
    /// File path whose file name carries the identifier's collection.
    FilePath { identifier_column: String },
    /// `Name (Abbr.)` places that must be in the gazetteer.
    OtherPlaces {
        language: Language,
        gazetteer: &'a Gazetteer,
    },
}

#[derive(Debug, Clone)]
pub struct CrossFieldRule<'a> {
    label: String,
    kind: CrossFieldKind<'a>,
    mirrored: Vec<String>,
}

impl<'a> CrossFieldRule<'a> {
    pub fn new(label: impl Into<String>, kind: CrossFieldKind<'a>) -> Self {
        let mirrored = match &kind {
            CrossFieldKind::Relationship { second_column, .. } => vec![second_column.clone()],
            _ => Vec::new(),
        };
        Self {
            label: label.into(),
            kind,
            mirrored,
        }
    }

    pub fn kind(&self) -> &CrossFieldKind<'a> {
        &self.kind
    }

    /// Columns that receive a copy of this rule's outcome.
    pub fn mirrored_columns(&self) -> &[String] {
        &self.mirrored
    }

    pub fn check(&self, cell: &CellValue, row: &Row) -> Result<Outcome> {
        match &self.kind {
            CrossFieldKind::YearDate { date_column } => check_year(cell, row, date_column),
            CrossFieldKind::DateTitle {
                title_column,
                date_check,
            } => check_date(cell, row, title_column, *date_check),
            CrossFieldKind::Relationship {
                first_column,
                second_column,
                language,
                taxonomy,
            } => check_relationship(cell, row, first_column, second_column, *language, taxonomy),
            CrossFieldKind::FilePath { identifier_column } => {
                self.check_file_path(cell, row, identifier_column)
            }
            CrossFieldKind::OtherPlaces {
                language,
                gazetteer,
            } => Ok(check_other_places(cell, *language, gazetteer)),
        }
    }

    fn check_file_path(&self, value: &CellValue, row: &Row, identifier_column: &str) -> Result<Outcome> {
        if value.is_blank() {
            return Ok(empty_value(&self.label));
        }
        let identifier = cell(row, identifier_column)?.trimmed();
        let collection = identifier.split('_').next().unwrap_or_default();
        let collection = regex::escape(collection);
        let extension = regex::escape(ITEM_EXTENSION);
        let path = value.trimmed();

        let standard = compile(&format!(
            r"^/Box_\d+/\d+_\d+/{collection}_\d+_\d+_\d+\.{extension}$"
        ))?;
        if standard.is_match(&path) {
            return Ok(Outcome::Valid);
        }
        let lettered = compile(&format!(
            r"^/Box_\d+/\d+_\d+/{collection}_\d+_\d+_\d+[A-Z]\.{extension}$"
        ))?;
        if lettered.is_match(&path) {
            return Ok(Outcome::soft("Non-standard numbering in file name (e.g., '05A')."));
        }
        Ok(Outcome::hard(format!("Invalid FullFolderOrFilePath format: '{path}'")))
    }

    pub fn describe(&self) -> String {
        let detail = match &self.kind {
            CrossFieldKind::YearDate { date_column } => format!("four-digit year of {date_column}"),
            CrossFieldKind::DateTitle {
                title_column,
                date_check: DateCheck::MatchTitle,
            } => format!("YYYY-MM-DD matching the date in {title_column}"),
            CrossFieldKind::DateTitle {
                date_check: DateCheck::FormatOnly,
                ..
            } => "YYYY-MM-DD or YYYY-MM".to_string(),
            CrossFieldKind::Relationship {
                second_column,
                language,
                taxonomy,
                ..
            } => format!(
                "{} {} relationships, paired with {second_column}",
                taxonomy.len(),
                language.label()
            ),
            CrossFieldKind::FilePath { identifier_column } => {
                format!("/Box_N/N_N/<collection of {identifier_column}>_N_N_N.pdf")
            }
            CrossFieldKind::OtherPlaces { language, .. } => {
                format!("'Name (Abbr.)' places in the {} gazetteer", language.label())
            }
        };
        format!("{}: {detail}", self.label)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|error| RuleError::Pattern {
        pattern: pattern.to_string(),
        message: error.to_string(),
    })
}

fn check_year(value: &CellValue, row: &Row, date_column: &str) -> Result<Outcome> {
    let date = cell(row, date_column)?.trimmed();
    let year = value.trimmed();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(Outcome::hard(format!("Invalid year format: {year}")));
    }
    let Some((date_year, _)) = date.split_once('-') else {
        return Ok(Outcome::hard(format!("Invalid date format: {date}")));
    };
    if date_year.is_empty() {
        return Ok(Outcome::hard(format!("Invalid date format: {date}")));
    }
    if year == date_year {
        Ok(Outcome::Valid)
    } else {
        Ok(Outcome::soft(format!(
            "Year '{year}' does not match date year '{date_year}'"
        )))
    }
}

fn check_date(value: &CellValue, row: &Row, title_column: &str, date_check: DateCheck) -> Result<Outcome> {
    match date_check {
        DateCheck::FormatOnly => {
            if value.is_blank() {
                return Ok(Outcome::Valid);
            }
            Ok(match parse_date(&value.trimmed()) {
                Some(_) => Outcome::Valid,
                None => Outcome::hard("Date format is invalid. Expected 'YYYY-MM-DD' or 'YYYY-MM'"),
            })
        }
        DateCheck::MatchTitle => {
            let title = cell(row, title_column)?.trimmed();
            if value.is_blank() {
                return Ok(Outcome::soft("Date column is empty."));
            }
            let date = value.trimmed();
            let Some(full) = DateFormat::Day.parse(&date).and_then(|parsed| parsed.full_date()) else {
                return Ok(Outcome::hard("Date format is invalid. Expected 'YYYY-MM-DD'."));
            };
            let Some(extracted) = date_from_title(&title) else {
                return Ok(Outcome::soft(format!("Unable to extract date from title: {title}")));
            };
            if extracted == full {
                Ok(Outcome::Valid)
            } else {
                Ok(Outcome::hard(format!(
                    "Date '{date}' does not match extracted date '{}' from title.",
                    extracted.format("%Y-%m-%d")
                )))
            }
        }
    }
}

fn check_relationship(
    value: &CellValue,
    row: &Row,
    first_column: &str,
    second_column: &str,
    language: Language,
    taxonomy: &RelationshipTaxonomy,
) -> Result<Outcome> {
    let first = value.trimmed();
    let second = cell(row, second_column)?.trimmed();
    if first.is_empty() && second.is_empty() {
        return Ok(Outcome::Valid);
    }

    let terms = split_terms(&first);
    let unique: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
    if unique.len() != terms.len() {
        return Ok(Outcome::hard(format!(
            "Duplicate terms found in {first_column}: '{first}'"
        )));
    }

    let invalid: Vec<&str> = terms
        .iter()
        .map(String::as_str)
        .filter(|term| !taxonomy.contains(term))
        .collect();
    if !invalid.is_empty() {
        return Ok(Outcome::hard(format!(
            "Invalid {first_column} terms: {} in {}",
            invalid.join(", "),
            language.label()
        )));
    }

    if !second.is_empty() {
        let paired = taxonomy.paired_union(terms.iter().map(String::as_str));
        if !paired.contains(second.as_str()) {
            return Ok(Outcome::hard(format!(
                "Invalid {second_column} value: '{second}' for {first_column}: '{first}' in {}",
                language.label()
            )));
        }
    }
    Ok(Outcome::Valid)
}

fn check_other_places(value: &CellValue, language: Language, gazetteer: &Gazetteer) -> Outcome {
    if value.is_blank() {
        return Outcome::Valid;
    }
    let mut malformed = Vec::new();
    let mut unknown = Vec::new();
    for place in split_terms(&value.trimmed()) {
        if !PLACE_RE.is_match(&place) {
            malformed.push(place);
            continue;
        }
        let name = place.split_once(" (").map_or(place.as_str(), |(name, _)| name);
        if !gazetteer.contains(&place, language) && !gazetteer.contains(name, language) {
            unknown.push(place);
        }
    }
    if !malformed.is_empty() {
        Outcome::hard(format!("Invalid city format(s): {}", malformed.join(", ")))
    } else if !unknown.is_empty() {
        Outcome::soft(format!(
            "City(s) not found in the approved city list: {}",
            unknown.join(", ")
        ))
    } else {
        Outcome::Valid
    }
}

#[cfg(test)]
mod tests {
    use catalog_model::Severity;
    use catalog_model::columns::{DATE, DIGITAL_IDENTIFIER, RELATIONSHIP1, RELATIONSHIP2, TITLE, YEAR};
    use catalog_standards::{Place, load_embedded};

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

    fn check(rule: &CrossFieldRule<'_>, column: &str, row: &Row) -> Result<Outcome> {
        rule.check(row.get(column).unwrap(), row)
    }

    #[test]
    fn year_against_date() {
        let rule = CrossFieldRule::new(
            "Year",
            CrossFieldKind::YearDate {
                date_column: DATE.to_string(),
            },
        );
        let ok = make_row(&[(YEAR, "1898"), (DATE, "1898-01-21")]);
        assert!(check(&rule, YEAR, &ok).unwrap().is_valid());

        let mismatch = make_row(&[(YEAR, "1899"), (DATE, "1898-01-21")]);
        assert_eq!(
            check(&rule, YEAR, &mismatch).unwrap(),
            Outcome::soft("Year '1899' does not match date year '1898'")
        );

        let short = make_row(&[(YEAR, "98"), (DATE, "1898-01-21")]);
        assert_eq!(
            check(&rule, YEAR, &short).unwrap(),
            Outcome::hard("Invalid year format: 98")
        );

        let undated = make_row(&[(YEAR, "1898"), (DATE, "")]);
        assert_eq!(
            check(&rule, YEAR, &undated).unwrap(),
            Outcome::hard("Invalid date format: ")
        );

        let missing = make_row(&[(YEAR, "1898")]);
        assert_eq!(
            check(&rule, YEAR, &missing),
            Err(RuleError::missing_column(DATE))
        );
    }

    fn date_rule(date_check: DateCheck) -> CrossFieldRule<'static> {
        CrossFieldRule::new(
            "Date",
            CrossFieldKind::DateTitle {
                title_column: TITLE.to_string(),
                date_check,
            },
        )
    }

    #[test]
    fn date_matches_title() {
        let rule = date_rule(DateCheck::MatchTitle);
        let ok = make_row(&[(DATE, "1898-01-21"), (TITLE, "Letter, January 21, 1898")]);
        assert!(check(&rule, DATE, &ok).unwrap().is_valid());

        let other = make_row(&[(DATE, "1898-01-22"), (TITLE, "Letter, January 21, 1898")]);
        assert_eq!(
            check(&rule, DATE, &other).unwrap(),
            Outcome::hard("Date '1898-01-22' does not match extracted date '1898-01-21' from title.")
        );

        let partial = make_row(&[(DATE, "1898-01"), (TITLE, "Letter, January 21, 1898")]);
        assert_eq!(check(&rule, DATE, &partial).unwrap().severity(), Some(Severity::Hard));

        let undated_title = make_row(&[(DATE, "1898-01-21"), (TITLE, "Letter")]);
        assert_eq!(
            check(&rule, DATE, &undated_title).unwrap(),
            Outcome::soft("Unable to extract date from title: Letter")
        );

        let empty = make_row(&[(DATE, ""), (TITLE, "Letter")]);
        assert_eq!(check(&rule, DATE, &empty).unwrap(), Outcome::soft("Date column is empty."));
    }

    #[test]
    fn date_format_only() {
        let rule = date_rule(DateCheck::FormatOnly);
        let month = make_row(&[(DATE, "1898-01")]);
        assert!(check(&rule, DATE, &month).unwrap().is_valid());
        let empty = make_row(&[(DATE, "")]);
        assert!(check(&rule, DATE, &empty).unwrap().is_valid());
        let bad = make_row(&[(DATE, "01/21/1898")]);
        assert_eq!(
            check(&rule, DATE, &bad).unwrap(),
            Outcome::hard("Date format is invalid. Expected 'YYYY-MM-DD' or 'YYYY-MM'")
        );
    }

    #[test]
    fn relationship_pairs() {
        let taxonomies = load_embedded().unwrap();
        let taxonomy = taxonomies.relationships(Language::English);
        let (relationship, paired) = taxonomy
            .relationships()
            .find_map(|term| {
                let paired = taxonomy.paired(term)?.iter().next()?;
                Some((term.to_string(), paired.clone()))
            })
            .unwrap();
        let rule = CrossFieldRule::new(
            "Relationship",
            CrossFieldKind::Relationship {
                first_column: RELATIONSHIP1.to_string(),
                second_column: RELATIONSHIP2.to_string(),
                language: Language::English,
                taxonomy,
            },
        );
        assert_eq!(rule.mirrored_columns(), [RELATIONSHIP2.to_string()]);

        let ok = make_row(&[(RELATIONSHIP1, &relationship), (RELATIONSHIP2, &paired)]);
        assert!(check(&rule, RELATIONSHIP1, &ok).unwrap().is_valid());

        let both_empty = make_row(&[(RELATIONSHIP1, ""), (RELATIONSHIP2, "")]);
        assert!(check(&rule, RELATIONSHIP1, &both_empty).unwrap().is_valid());

        let doubled = format!("{relationship}[|]{relationship}");
        let duplicate = make_row(&[(RELATIONSHIP1, &doubled), (RELATIONSHIP2, "")]);
        assert_eq!(
            check(&rule, RELATIONSHIP1, &duplicate).unwrap(),
            Outcome::hard(format!("Duplicate terms found in RELATIONSHIP1: '{doubled}'"))
        );

        let unknown = make_row(&[(RELATIONSHIP1, "Nobody in particular"), (RELATIONSHIP2, "")]);
        assert_eq!(
            check(&rule, RELATIONSHIP1, &unknown).unwrap(),
            Outcome::hard("Invalid RELATIONSHIP1 terms: Nobody in particular in English")
        );

        let unpaired = make_row(&[(RELATIONSHIP1, &relationship), (RELATIONSHIP2, "Nothing")]);
        assert_eq!(
            check(&rule, RELATIONSHIP1, &unpaired).unwrap(),
            Outcome::hard(format!(
                "Invalid RELATIONSHIP2 value: 'Nothing' for RELATIONSHIP1: '{relationship}' in English"
            ))
        );
    }

    #[test]
    fn file_path_carries_collection() {
        let rule = CrossFieldRule::new(
            "File path",
            CrossFieldKind::FilePath {
                identifier_column: DIGITAL_IDENTIFIER.to_string(),
            },
        );
        let path_row = |path: &str| {
            make_row(&[("FullFolderOrFilePath", path), (DIGITAL_IDENTIFIER, "Ms0004_01_07_01.pdf")])
        };
        let check_path = |path: &str| check(&rule, "FullFolderOrFilePath", &path_row(path)).unwrap();

        assert!(check_path("/Box_1/01_07/Ms0004_01_07_01.pdf").is_valid());
        assert_eq!(
            check_path("/Box_1/01_07/Ms0004_01_07_05A.pdf"),
            Outcome::soft("Non-standard numbering in file name (e.g., '05A').")
        );
        assert_eq!(
            check_path("/Box_1/01_07/Ms0071_01_07_01.pdf"),
            Outcome::hard("Invalid FullFolderOrFilePath format: '/Box_1/01_07/Ms0071_01_07_01.pdf'")
        );
        assert_eq!(check_path("").severity(), Some(Severity::Soft));
    }

    #[test]
    fn other_places_format_then_gazetteer() {
        let mut gazetteer = Gazetteer::default();
        gazetteer.insert(
            "Santa Fe",
            Language::English,
            Place {
                country: "United States".into(),
                state: "New Mexico".into(),
                coordinates: "35.6870, -105.9378".into(),
            },
        );
        let rule = CrossFieldRule::new(
            "Other places",
            CrossFieldKind::OtherPlaces {
                language: Language::English,
                gazetteer: &gazetteer,
            },
        );
        let empty = Row::new(0, Vec::new());
        let check_places = |value: &str| rule.check(&CellValue::text(value), &empty).unwrap();

        assert!(check_places("").is_valid());
        assert!(check_places("Santa Fe (N.M.)").is_valid());
        assert_eq!(
            check_places("Santa Fe (N.M.)[|]Ciudad Juárez (Chih.)"),
            Outcome::soft("City(s) not found in the approved city list: Ciudad Juárez (Chih.)")
        );
        assert_eq!(
            check_places("Santa Fe[|]Taos (N.M.)"),
            Outcome::hard("Invalid city format(s): Santa Fe")
        );
    }
}
