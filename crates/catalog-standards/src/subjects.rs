//! Approved subject headings (LCSH).

use std::path::Path;

use catalog_ingest::RawTable;
use catalog_model::Language;

use crate::error::Result;
use crate::source::{cell_text, read_reference, require_width};
use crate::vocabulary::Vocabulary;

/// Subject headings: column A Spanish, column B English, below a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectTerms {
    pub spanish: Vocabulary,
    pub english: Vocabulary,
}

impl SubjectTerms {
    pub fn load(path: &Path) -> Result<Self> {
        let table = read_reference(path)?;
        let subjects = Self::from_table(&table, path)?;
        tracing::info!(
            path = %path.display(),
            spanish = subjects.spanish.len(),
            english = subjects.english.len(),
            "loaded subject headings"
        );
        Ok(subjects)
    }

    pub fn from_table(table: &RawTable, path: &Path) -> Result<Self> {
        require_width(table, 2, path)?;
        Ok(Self {
            spanish: Vocabulary::new(table.rows.iter().map(|row| cell_text(row, 0))),
            english: Vocabulary::new(table.rows.iter().map(|row| cell_text(row, 1))),
        })
    }

    pub fn for_language(&self, language: Language) -> &Vocabulary {
        match language {
            Language::English => &self.english,
            Language::Spanish => &self.spanish,
        }
    }
}
