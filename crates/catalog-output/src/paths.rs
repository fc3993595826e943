//! Output file naming.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Prefix added to the input file stem.
pub const OUTPUT_PREFIX: &str = "Verified_";

/// Where the outputs of one run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `Verified_<stem>.xlsx`
    pub workbook: PathBuf,
    /// `Verified_<stem>_diagnostics.csv`
    pub diagnostics: PathBuf,
}

impl OutputPaths {
    /// Derive output paths for `input`, placed in `output_dir` or next to the input.
    pub fn for_input(input: &Path, output_dir: Option<&Path>) -> Result<Self> {
        let stem = input
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| OutputError::NoFileStem {
                path: input.to_path_buf(),
            })?;
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        Ok(Self {
            workbook: dir.join(format!("{OUTPUT_PREFIX}{stem}.xlsx")),
            diagnostics: dir.join(format!("{OUTPUT_PREFIX}{stem}_diagnostics.csv")),
        })
    }

    /// Create the directory the outputs go into.
    pub fn ensure_dir(&self) -> Result<()> {
        let Some(dir) = self.workbook.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
            return Ok(());
        };
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_input_stem() {
        let paths = OutputPaths::for_input(Path::new("data/Amador.xlsx"), None).unwrap();
        assert_eq!(paths.workbook, Path::new("data/Verified_Amador.xlsx"));
        assert_eq!(paths.diagnostics, Path::new("data/Verified_Amador_diagnostics.csv"));
    }

    #[test]
    fn csv_input_still_writes_xlsx() {
        let paths = OutputPaths::for_input(Path::new("Amador.csv"), Some(Path::new("out"))).unwrap();
        assert_eq!(paths.workbook, Path::new("out/Verified_Amador.xlsx"));
    }

    #[test]
    fn rejects_path_without_stem() {
        assert!(OutputPaths::for_input(Path::new(""), None).is_err());
    }
}
