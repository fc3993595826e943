//! Verification of one worksheet: load, validate, write outputs.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use catalog_ingest::load_worksheet;
use catalog_output::{JsonReport, OutputPaths, write_json_report, write_outputs};
use catalog_standards::{ReferenceData, ReferencePaths};
use catalog_validate::{RuleRegistry, ValidationEngine, ValidationOptions};

use crate::types::VerifyResult;

/// Everything needed to verify one worksheet.
#[derive(Debug, Clone)]
pub struct VerifyRequest {
    pub input: PathBuf,
    /// Worksheet name for workbook inputs; the first sheet when `None`.
    pub sheet: Option<String>,
    pub reference: ReferencePaths,
    /// Directory for outputs; next to the input when `None`.
    pub output_dir: Option<PathBuf>,
    pub options: ValidationOptions,
    pub json_report: Option<PathBuf>,
}

impl VerifyRequest {
    pub fn new(input: impl Into<PathBuf>, reference: ReferencePaths) -> Self {
        Self {
            input: input.into(),
            sheet: None,
            reference,
            output_dir: None,
            options: ValidationOptions::default(),
            json_report: None,
        }
    }
}

/// Verify a worksheet and write its marked copy and diagnostics.
///
/// Reference data and the worksheet are loaded before any row is checked;
/// a failure there returns an error and writes nothing.
pub fn run_verify(request: &VerifyRequest) -> Result<VerifyResult> {
    let span = info_span!("verify", input = %request.input.display());
    let _guard = span.enter();

    let reference = ReferenceData::load(&request.reference).context("load reference data")?;
    let worksheet = load_worksheet(&request.input, request.sheet.as_deref())
        .with_context(|| format!("load worksheet {}", request.input.display()))?;

    let registry = RuleRegistry::standard(&reference, &request.options);
    let columns = worksheet.columns();
    let (checked_columns, unchecked_columns): (Vec<String>, Vec<String>) = columns
        .iter()
        .cloned()
        .partition(|column| registry.covers(column));
    if checked_columns.is_empty() {
        bail!(
            "{} contains none of the catalog columns (found: {})",
            request.input.display(),
            columns.join(", ")
        );
    }
    info!(
        checked = checked_columns.len(),
        unchecked = unchecked_columns.len(),
        "matched worksheet columns"
    );

    let mut engine = ValidationEngine::new(registry);
    let report = engine.validate(&worksheet.rows);

    let outputs = OutputPaths::for_input(&request.input, request.output_dir.as_deref())
        .context("derive output paths")?;
    write_outputs(
        &outputs,
        worksheet.sheet.as_deref(),
        &columns,
        &worksheet.rows,
        &report,
    )
    .context("write outputs")?;

    if let Some(path) = &request.json_report {
        let json = JsonReport::new(&request.input, request.options, &report);
        write_json_report(path, &json).context("write JSON report")?;
    }

    Ok(VerifyResult {
        input: request.input.clone(),
        outputs,
        json_report: request.json_report.clone(),
        checked_columns,
        unchecked_columns,
        report,
    })
}
