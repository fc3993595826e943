//! City gazetteer.
//!
//! Each source row describes one city in both languages. It yields one
//! Spanish and one English entry keyed by the lowercased, trimmed city name;
//! a blank city for a language yields no entry for that language.

use std::collections::BTreeMap;
use std::path::Path;

use catalog_ingest::RawTable;
use catalog_model::Language;

use crate::error::Result;
use crate::source::{cell_text, column_index, read_reference};

/// Column holding the coordinates shared by both languages.
pub const COORDINATES_COLUMN: &str = "CITIES' LAT_LONG COORDINATES";

/// Expected location of a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub country: String,
    pub state: String,
    pub coordinates: String,
}

/// Immutable `(city, language)` → [`Place`] lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gazetteer {
    entries: BTreeMap<(String, Language), Place>,
}

impl Gazetteer {
    /// Load a gazetteer worksheet.
    pub fn load(path: &Path) -> Result<Self> {
        let table = read_reference(path)?;
        let gazetteer = Self::from_table(&table, path)?;
        tracing::info!(
            path = %path.display(),
            entries = gazetteer.len(),
            "loaded gazetteer"
        );
        Ok(gazetteer)
    }

    /// Build a gazetteer from an already-read worksheet.
    pub fn from_table(table: &RawTable, path: &Path) -> Result<Self> {
        let coordinates = column_index(table, COORDINATES_COLUMN, path)?;
        let mut layouts = Vec::with_capacity(Language::ALL.len());
        for language in Language::ALL {
            let code = language.code();
            layouts.push((
                language,
                column_index(table, &format!("{code}_City"), path)?,
                column_index(table, &format!("{code}_Country"), path)?,
                column_index(table, &format!("{code}_State"), path)?,
            ));
        }

        let mut gazetteer = Self::default();
        for row in &table.rows {
            let coords = cell_text(row, coordinates);
            for &(language, city, country, state) in &layouts {
                let city = cell_text(row, city);
                if city.is_empty() {
                    continue;
                }
                gazetteer.insert(
                    &city,
                    language,
                    Place {
                        country: cell_text(row, country),
                        state: cell_text(row, state),
                        coordinates: coords.clone(),
                    },
                );
            }
        }
        Ok(gazetteer)
    }

    /// Add or replace an entry; later rows win, as in a dictionary load.
    pub fn insert(&mut self, city: &str, language: Language, place: Place) {
        self.entries.insert((city_key(city), language), place);
    }

    /// Look up a city (case-insensitive, trimmed).
    pub fn lookup(&self, city: &str, language: Language) -> Option<&Place> {
        self.entries.get(&(city_key(city), language))
    }

    pub fn contains(&self, city: &str, language: Language) -> bool {
        self.lookup(city, language).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn city_key(city: &str) -> String {
    city.trim().to_lowercase()
}
