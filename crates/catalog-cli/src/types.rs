use std::path::PathBuf;

use catalog_output::OutputPaths;
use catalog_validate::ValidationReport;

/// Result of verifying one worksheet.
#[derive(Debug)]
pub struct VerifyResult {
    pub input: PathBuf,
    pub outputs: OutputPaths,
    pub json_report: Option<PathBuf>,
    /// Worksheet columns that at least one rule checks.
    pub checked_columns: Vec<String>,
    /// Worksheet columns no rule checks.
    pub unchecked_columns: Vec<String>,
    pub report: ValidationReport,
}

impl VerifyResult {
    pub fn has_hard(&self) -> bool {
        self.report.has_hard()
    }
}
