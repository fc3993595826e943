//! Embedded taxonomy data.
//!
//! The closed vocabularies of the collection are embedded at compile time
//! using `include_str!()`, so only the gazetteer, the authorized names and
//! the subject headings are read from disk at run time.
//!
//! # Structure
//!
//! - `series.csv`: approved series names
//! - `relationships.csv`: relationship taxonomy per language (`EN`/`ES`),
//!   one row per (relationship, paired term); an empty paired term declares
//!   a relationship without pairs
//! - `physical_description.csv`, `genre.csv`, `medium.csv`, `languages.csv`:
//!   English/Spanish term pairs

/// Approved series names.
pub const SERIES: &str = include_str!("../data/series.csv");

/// Relationship taxonomy, both languages.
pub const RELATIONSHIPS: &str = include_str!("../data/relationships.csv");

/// Physical description terms.
pub const PHYSICAL_DESCRIPTION: &str = include_str!("../data/physical_description.csv");

/// AAT genre terms.
pub const GENRE: &str = include_str!("../data/genre.csv");

/// AAT medium terms.
pub const MEDIUM: &str = include_str!("../data/medium.csv");

/// Language names.
pub const LANGUAGES: &str = include_str!("../data/languages.csv");
