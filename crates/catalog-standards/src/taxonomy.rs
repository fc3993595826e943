//! Embedded taxonomy loading.
//!
//! Parses the compiled-in CSV vocabularies (see [`crate::embedded`]) into
//! per-language lookup structures.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use catalog_model::Language;

use crate::embedded;
use crate::error::{Result, StandardsError};
use crate::vocabulary::Vocabulary;

#[derive(Debug, Deserialize)]
struct SeriesRow {
    #[serde(rename = "Series")]
    name: String,
}

#[derive(Debug, Deserialize)]
struct RelationshipRow {
    #[serde(rename = "Language")]
    language: String,
    #[serde(rename = "Relationship")]
    relationship: String,
    #[serde(rename = "Paired Term", default)]
    paired: String,
}

#[derive(Debug, Deserialize)]
struct TermPairRow {
    #[serde(rename = "English")]
    english: String,
    #[serde(rename = "Spanish")]
    spanish: String,
}

/// Relationship taxonomy of one language: relationship → valid paired terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipTaxonomy {
    terms: BTreeMap<String, BTreeSet<String>>,
}

impl RelationshipTaxonomy {
    /// True when `term` is a known relationship.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Paired terms valid for one relationship.
    pub fn paired(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.terms.get(term)
    }

    /// Union of the paired terms of several relationships.
    pub fn paired_union<'a>(&self, terms: impl IntoIterator<Item = &'a str>) -> BTreeSet<&str> {
        terms
            .into_iter()
            .filter_map(|term| self.terms.get(term))
            .flat_map(|paired| paired.iter().map(String::as_str))
            .collect()
    }

    pub fn relationships(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A closed list kept as English/Spanish pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BilingualTerms {
    english: BTreeSet<String>,
    spanish: BTreeSet<String>,
}

impl BilingualTerms {
    pub fn terms(&self, language: Language) -> &BTreeSet<String> {
        match language {
            Language::English => &self.english,
            Language::Spanish => &self.spanish,
        }
    }

    pub fn contains(&self, language: Language, term: &str) -> bool {
        self.terms(language).contains(term)
    }
}

/// All embedded vocabularies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomies {
    pub series: Vocabulary,
    pub relationships: BTreeMap<Language, RelationshipTaxonomy>,
    pub physical_description: BilingualTerms,
    pub genre: BilingualTerms,
    pub medium: BilingualTerms,
    pub languages: BilingualTerms,
}

impl Taxonomies {
    /// Relationship taxonomy for a language.
    pub fn relationships(&self, language: Language) -> &RelationshipTaxonomy {
        static EMPTY: RelationshipTaxonomy = RelationshipTaxonomy {
            terms: BTreeMap::new(),
        };
        self.relationships.get(&language).unwrap_or(&EMPTY)
    }
}

/// Load every embedded taxonomy.
pub fn load_embedded() -> Result<Taxonomies> {
    let series: Vec<SeriesRow> = parse_rows(embedded::SERIES, "series.csv")?;
    let taxonomies = Taxonomies {
        series: Vocabulary::new(series.iter().map(|row| row.name.as_str())),
        relationships: load_relationships(embedded::RELATIONSHIPS, "relationships.csv")?,
        physical_description: load_pairs(embedded::PHYSICAL_DESCRIPTION, "physical_description.csv")?,
        genre: load_pairs(embedded::GENRE, "genre.csv")?,
        medium: load_pairs(embedded::MEDIUM, "medium.csv")?,
        languages: load_pairs(embedded::LANGUAGES, "languages.csv")?,
    };

    tracing::debug!(
        series = taxonomies.series.len(),
        genre = taxonomies.genre.terms(Language::English).len(),
        physical_description = taxonomies.physical_description.terms(Language::English).len(),
        "loaded embedded taxonomies"
    );
    Ok(taxonomies)
}

/// Parse a relationship taxonomy from CSV content.
pub fn load_relationships(
    content: &str,
    filename: &str,
) -> Result<BTreeMap<Language, RelationshipTaxonomy>> {
    let rows: Vec<RelationshipRow> = parse_rows(content, filename)?;
    let mut taxonomies: BTreeMap<Language, RelationshipTaxonomy> = BTreeMap::new();
    for row in rows {
        let language = parse_language(&row.language, filename)?;
        let relationship = row.relationship.trim();
        if relationship.is_empty() {
            tracing::warn!(file = %filename, "relationship row without a relationship term");
            continue;
        }
        let paired = taxonomies
            .entry(language)
            .or_default()
            .terms
            .entry(relationship.to_string())
            .or_default();
        let term = row.paired.trim();
        if !term.is_empty() {
            paired.insert(term.to_string());
        }
    }
    Ok(taxonomies)
}

/// Parse English/Spanish term pairs from CSV content.
pub fn load_pairs(content: &str, filename: &str) -> Result<BilingualTerms> {
    let rows: Vec<TermPairRow> = parse_rows(content, filename)?;
    let mut terms = BilingualTerms::default();
    for row in rows {
        let english = row.english.trim();
        let spanish = row.spanish.trim();
        if english.is_empty() || spanish.is_empty() {
            tracing::warn!(
                file = %filename,
                english = %english,
                spanish = %spanish,
                "incomplete term pair"
            );
        }
        if !english.is_empty() {
            terms.english.insert(english.to_string());
        }
        if !spanish.is_empty() {
            terms.spanish.insert(spanish.to_string());
        }
    }
    Ok(terms)
}

fn parse_language(code: &str, filename: &str) -> Result<Language> {
    Language::ALL
        .into_iter()
        .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
        .ok_or_else(|| StandardsError::InvalidValue {
            field: "Language",
            value: code.to_string(),
            file: filename.to_string(),
        })
}

fn parse_rows<T: DeserializeOwned>(content: &str, filename: &str) -> Result<Vec<T>> {
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(cursor);

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        let row = result.map_err(|e| StandardsError::CsvParse {
            file: filename.to_string(),
            message: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
