//! The complete reference data set of one verification run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gazetteer::Gazetteer;
use crate::names::load_authorized_names;
use crate::subjects::SubjectTerms;
use crate::taxonomy::{Taxonomies, load_embedded};
use crate::vocabulary::Vocabulary;

/// Default subject headings file name.
pub const DEFAULT_SUBJECTS_FILE: &str = "SUBJECT_LCSH.xlsx";
/// Default gazetteer file name.
pub const DEFAULT_GAZETTEER_FILE: &str = "Maybeee.xlsx";
/// Default authorized names file name.
pub const DEFAULT_NAMES_FILE: &str = "CVPeople.xlsx";

/// Locations of the on-disk reference vocabularies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePaths {
    pub subjects: PathBuf,
    pub gazetteer: PathBuf,
    pub names: PathBuf,
}

impl Default for ReferencePaths {
    fn default() -> Self {
        Self {
            subjects: PathBuf::from(DEFAULT_SUBJECTS_FILE),
            gazetteer: PathBuf::from(DEFAULT_GAZETTEER_FILE),
            names: PathBuf::from(DEFAULT_NAMES_FILE),
        }
    }
}

impl ReferencePaths {
    /// Default file names resolved against a directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            subjects: dir.join(DEFAULT_SUBJECTS_FILE),
            gazetteer: dir.join(DEFAULT_GAZETTEER_FILE),
            names: dir.join(DEFAULT_NAMES_FILE),
        }
    }
}

/// Every vocabulary the rules consult. Loaded once, then shared immutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub gazetteer: Gazetteer,
    pub names: Vocabulary,
    pub subjects: SubjectTerms,
    pub taxonomies: Taxonomies,
}

impl ReferenceData {
    /// Load all reference files plus the embedded taxonomies.
    ///
    /// Fails on the first missing or malformed source.
    pub fn load(paths: &ReferencePaths) -> Result<Self> {
        let _span = tracing::info_span!("load_reference_data").entered();
        let subjects = SubjectTerms::load(&paths.subjects)?;
        let gazetteer = Gazetteer::load(&paths.gazetteer)?;
        let names = load_authorized_names(&paths.names)?;
        let taxonomies = load_embedded()?;
        Ok(Self {
            gazetteer,
            names,
            subjects,
            taxonomies,
        })
    }

    /// Assemble reference data from parts, with the embedded taxonomies.
    pub fn from_parts(gazetteer: Gazetteer, names: Vocabulary, subjects: SubjectTerms) -> Result<Self> {
        Ok(Self {
            gazetteer,
            names,
            subjects,
            taxonomies: load_embedded()?,
        })
    }
}
