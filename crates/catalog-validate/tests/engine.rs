use catalog_model::columns::{
    DIGITAL_IDENTIFIER, FROM, GEOLOC_SCITY, OA_STATUS, RELATIONSHIP1, SENDERS_CITY,
    SENDERS_COUNTRY, SENDERS_STATE, YEAR,
};
use catalog_model::{CellOutcome, CellValue, Language, Outcome, Row, Severity};
use catalog_standards::{Gazetteer, Place, ReferenceData, SubjectTerms, Vocabulary};
use catalog_validate::{
    RecordingSink, RuleRegistry, SequenceBaseline, ValidationEngine, ValidationOptions,
    apply_markings,
};

fn reference() -> ReferenceData {
    let mut gazetteer = Gazetteer::default();
    gazetteer.insert(
        "Springer",
        Language::English,
        Place {
            country: "United States".into(),
            state: "New Mexico".into(),
            coordinates: "36.3614, -104.5950".into(),
        },
    );
    ReferenceData::from_parts(
        gazetteer,
        Vocabulary::new(["Juan Pérez", "María Amador"]),
        SubjectTerms::default(),
    )
    .expect("embedded taxonomies")
}

fn rows(data: &[&[(&str, &str)]]) -> Vec<Row> {
    data.iter()
        .enumerate()
        .map(|(index, cells)| {
            Row::new(
                index,
                cells
                    .iter()
                    .map(|(column, value)| (column.to_string(), CellValue::text(*value)))
                    .collect(),
            )
        })
        .collect()
}

fn outcome_for<'r>(outcomes: &'r [CellOutcome], row: usize, column: &str) -> &'r Outcome {
    &outcomes
        .iter()
        .find(|outcome| outcome.row == row && outcome.column == column)
        .unwrap_or_else(|| panic!("no outcome for row {row}, {column}"))
        .outcome
}

#[test]
fn identifier_gap_is_hard() {
    let reference = reference();
    let mut engine = ValidationEngine::new(RuleRegistry::standard(
        &reference,
        &ValidationOptions::default(),
    ));
    let rows = rows(&[
        &[(DIGITAL_IDENTIFIER, "Ms0004_01_07_01.pdf")],
        &[(DIGITAL_IDENTIFIER, "Ms0004_01_07_03.pdf")],
    ]);
    let report = engine.validate(&rows);

    assert!(outcome_for(&report.outcomes, 2, DIGITAL_IDENTIFIER).is_valid());
    let second = outcome_for(&report.outcomes, 3, DIGITAL_IDENTIFIER);
    assert_eq!(second.severity(), Some(Severity::Hard));
    assert!(second.reason().unwrap().contains("Expected 02 but got 03"));
}

#[test]
fn state_mismatch_marks_state_column() {
    let reference = reference();
    let mut engine = ValidationEngine::new(RuleRegistry::standard(
        &reference,
        &ValidationOptions::default(),
    ));
    let rows = rows(&[&[
        (SENDERS_CITY, "Springer"),
        (SENDERS_COUNTRY, "United States"),
        (SENDERS_STATE, "Texas"),
        (GEOLOC_SCITY, "36.3614, -104.5950"),
    ]]);
    let report = engine.validate(&rows);

    let mut sink = RecordingSink::default();
    assert_eq!(apply_markings(&report, &mut sink), 1);
    assert_eq!(sink.markings[0].row, 2);
    assert_eq!(sink.markings[0].column, SENDERS_STATE);
    assert_eq!(sink.markings[0].severity, Severity::Hard);
}

#[test]
fn names_classified_three_ways() {
    let reference = reference();
    let mut engine = ValidationEngine::new(RuleRegistry::standard(
        &reference,
        &ValidationOptions::default(),
    ));
    let rows = rows(&[
        &[(FROM, "Juan Pérez")],
        &[(FROM, "juan pérez")],
        &[(FROM, "Jane Doe")],
        &[(FROM, "Unknown sender")],
    ]);
    let report = engine.validate(&rows);

    assert!(outcome_for(&report.outcomes, 2, FROM).is_valid());
    assert_eq!(
        outcome_for(&report.outcomes, 3, FROM),
        &Outcome::hard("Format error: Expected 'Juan Pérez'")
    );
    assert_eq!(
        outcome_for(&report.outcomes, 4, FROM).severity(),
        Some(Severity::Soft)
    );
    assert!(outcome_for(&report.outcomes, 5, FROM).is_valid());
}

#[test]
fn no_data_city_is_skipped() {
    let reference = reference();
    let mut engine = ValidationEngine::new(RuleRegistry::standard(
        &reference,
        &ValidationOptions::default(),
    ));
    let rows = rows(&[&[(SENDERS_CITY, "No data"), (SENDERS_STATE, "Texas")]]);
    let report = engine.validate(&rows);

    assert_eq!(report.hard_count() + report.soft_count(), 0);
    assert_eq!(report.outcomes.len(), 1);
}

#[test]
fn failures_stay_in_their_cell() {
    let reference = reference();
    let mut engine = ValidationEngine::new(RuleRegistry::standard(
        &reference,
        &ValidationOptions::default(),
    ));
    let rows = rows(&[&[(OA_STATUS, "DRAFT"), (FROM, "María Amador"), ("NOTES", "anything")]]);
    let report = engine.validate(&rows);

    assert_eq!(
        outcome_for(&report.outcomes, 2, OA_STATUS).severity(),
        Some(Severity::Hard)
    );
    assert!(outcome_for(&report.outcomes, 2, FROM).is_valid());
    assert!(report.outcomes.iter().all(|outcome| outcome.column != "NOTES"));
}

#[test]
fn missing_companion_column_is_internal_error() {
    let reference = reference();
    let mut engine = ValidationEngine::new(RuleRegistry::standard(
        &reference,
        &ValidationOptions::default(),
    ));
    let rows = rows(&[&[(RELATIONSHIP1, "Family"), (YEAR, "1898")]]);
    let report = engine.validate(&rows);

    for column in [RELATIONSHIP1, YEAR] {
        let outcome = outcome_for(&report.outcomes, 2, column);
        assert_eq!(outcome.severity(), Some(Severity::Hard));
        assert!(outcome.reason().unwrap().starts_with("internal error:"));
    }
}

#[test]
fn redirect_to_absent_column_marks_city() {
    let reference = reference();
    let mut engine = ValidationEngine::new(RuleRegistry::standard(
        &reference,
        &ValidationOptions::default(),
    ));
    let rows = rows(&[&[(SENDERS_CITY, "Springer")]]);
    let report = engine.validate(&rows);

    let outcome = &report.outcomes[0];
    assert_eq!(outcome.column, SENDERS_CITY);
    assert_eq!(outcome.marked_column(), SENDERS_CITY);
    assert!(
        outcome
            .outcome
            .reason()
            .unwrap()
            .starts_with("internal error: column 'GEOLOC_SCITY'")
    );
}

#[test]
fn repeated_first_letter_in_same_folder_is_hard() {
    let reference = reference();
    let mut engine = ValidationEngine::new(RuleRegistry::standard(
        &reference,
        &ValidationOptions::default(),
    ));
    let rows = rows(&[
        &[(DIGITAL_IDENTIFIER, "Ms0004_01_07_01.pdf")],
        &[(DIGITAL_IDENTIFIER, "Ms0004_01_07_02.pdf")],
        &[(DIGITAL_IDENTIFIER, "Ms0004_01_07_01.pdf")],
        &[(DIGITAL_IDENTIFIER, "Ms0004_01_07_01.pdf")],
    ]);
    let report = engine.validate(&rows);

    assert!(outcome_for(&report.outcomes, 2, DIGITAL_IDENTIFIER).is_valid());
    assert!(outcome_for(&report.outcomes, 3, DIGITAL_IDENTIFIER).is_valid());
    for row in [4, 5] {
        let outcome = outcome_for(&report.outcomes, row, DIGITAL_IDENTIFIER);
        assert_eq!(
            outcome.reason(),
            Some("Letter number must increment sequentially. Expected 03 but got 01")
        );
    }
}

#[test]
fn reset_clears_sequencing() {
    let reference = reference();
    let options = ValidationOptions::new().with_sequence_baseline(SequenceBaseline::AlwaysAdvance);
    let mut engine = ValidationEngine::new(RuleRegistry::standard(&reference, &options));
    let first = rows(&[&[(DIGITAL_IDENTIFIER, "Ms0004_01_07_01.pdf")]]);
    let second = rows(&[&[(DIGITAL_IDENTIFIER, "Ms0004_01_07_02.pdf")]]);

    engine.validate(&first);
    assert!(!engine.validate(&second).has_hard());
    engine.reset();
    assert!(engine.validate(&second).has_hard());
}
