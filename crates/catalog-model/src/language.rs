//! Catalog languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix that marks the Spanish copy of a column (`ES..DATE`).
pub const SPANISH_COLUMN_PREFIX: &str = "ES..";

/// Language of a catalog column or vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// Both languages, English first.
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
        }
    }

    /// Two-letter code used in reference sources (`EN_City`, `ES_City`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Spanish => "ES",
        }
    }

    /// Language a column belongs to, judged by its `ES..` prefix.
    pub fn of_column(column: &str) -> Self {
        if column.starts_with(SPANISH_COLUMN_PREFIX) {
            Self::Spanish
        } else {
            Self::English
        }
    }

    /// Column name for this language: `DATE` or `ES..DATE`.
    pub fn column(&self, base: &str) -> String {
        match self {
            Self::English => base.to_string(),
            Self::Spanish => format!("{SPANISH_COLUMN_PREFIX}{base}"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
