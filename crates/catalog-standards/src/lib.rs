//! Reference vocabularies for catalog verification.
//!
//! Three vocabularies come from reference worksheets on disk:
//!
//! - **Gazetteer**: city → country, state, coordinates per language
//! - **Authorized names**: people allowed in `FROM` / `TO`
//! - **Subject headings**: LCSH terms per language
//!
//! The closed lists of the collection (series, relationships, physical
//! description, genre, medium, languages) are embedded at compile time, and
//! the fixed field values live in [`constants`].
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_standards::{ReferenceData, ReferencePaths};
//!
//! let reference = ReferenceData::load(&ReferencePaths::default())?;
//! assert!(reference.taxonomies.series.contains("Personal Papers, 1892-1948"));
//! ```

pub mod constants;
pub mod embedded;
pub mod error;
pub mod gazetteer;
pub mod names;
pub mod reference;
mod source;
pub mod subjects;
pub mod taxonomy;
pub mod vocabulary;

pub use constants::Bilingual;
pub use error::{Result, StandardsError};
pub use gazetteer::{COORDINATES_COLUMN, Gazetteer, Place};
pub use names::{load_authorized_names, names_from_table};
pub use reference::{ReferenceData, ReferencePaths};
pub use subjects::SubjectTerms;
pub use taxonomy::{BilingualTerms, RelationshipTaxonomy, Taxonomies, load_embedded};
pub use vocabulary::{TermMatch, Vocabulary, fold};
