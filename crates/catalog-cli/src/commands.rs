use anyhow::{Context, Result};
use comfy_table::Table;

use catalog_standards::{Gazetteer, ReferenceData, ReferencePaths, SubjectTerms, Vocabulary};
use catalog_validate::{RuleRegistry, ValidationOptions};
use catalog_cli::types::VerifyResult;
use catalog_cli::verify::{VerifyRequest, run_verify as verify_worksheet};

use crate::cli::VerifyArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_columns() -> Result<()> {
    // The listing needs rule shapes only, so the on-disk vocabularies stay empty.
    let reference = ReferenceData::from_parts(
        Gazetteer::default(),
        Vocabulary::new(std::iter::empty::<&str>()),
        SubjectTerms::default(),
    )
    .context("load embedded taxonomies")?;
    let registry = RuleRegistry::standard(&reference, &ValidationOptions::default());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Kind"), header_cell("Rule")]);
    apply_table_style(&mut table);
    for (column, rule) in registry.iter() {
        table.add_row(vec![column.to_string(), rule.kind().to_string(), rule.describe()]);
    }
    for location in registry.locations() {
        table.add_row(vec![
            location.columns().join(", "),
            "location".to_string(),
            location.describe(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_verify(args: &VerifyArgs) -> Result<VerifyResult> {
    verify_worksheet(&request_from_args(args))
}

fn request_from_args(args: &VerifyArgs) -> VerifyRequest {
    let mut reference = match &args.reference_dir {
        Some(dir) => ReferencePaths::in_dir(dir),
        None => ReferencePaths::default(),
    };
    if let Some(path) = &args.subjects {
        reference.subjects = path.clone();
    }
    if let Some(path) = &args.gazetteer {
        reference.gazetteer = path.clone();
    }
    if let Some(path) = &args.names {
        reference.names = path.clone();
    }

    let mut request = VerifyRequest::new(args.file.clone(), reference);
    request.sheet = args.sheet.clone();
    request.output_dir = args.output_dir.clone();
    request.json_report = args.report_json.clone();
    request.options = ValidationOptions::new()
        .with_sequence_baseline(args.sequence_baseline.into())
        .with_date_check(args.date_check.into());
    request
}
