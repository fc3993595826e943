use std::fs;

use calamine::{Data, Reader, open_workbook_auto};
use catalog_model::{CellOutcome, CellValue, Outcome, Row};
use catalog_output::{
    JsonReport, OutputPaths, SHEET_NAME, write_json_report, write_outputs,
};
use catalog_validate::{ValidationOptions, ValidationReport};
use tempfile::TempDir;

fn sheet() -> (Vec<String>, Vec<Row>) {
    let columns = vec!["DIGITAL_IDENTIFIER".to_string(), "YEAR".to_string(), "NOTES".to_string()];
    let rows = vec![
        Row::new(
            0,
            vec![
                ("DIGITAL_IDENTIFIER".into(), CellValue::text("Ms0004_01_07_01.pdf")),
                ("YEAR".into(), CellValue::Number(1898.0)),
                ("NOTES".into(), CellValue::Empty),
            ],
        ),
        Row::new(
            1,
            vec![
                ("DIGITAL_IDENTIFIER".into(), CellValue::text("Ms0004_01_07_03.pdf")),
                ("YEAR".into(), CellValue::Empty),
                ("NOTES".into(), CellValue::text("torn")),
            ],
        ),
    ];
    (columns, rows)
}

fn report() -> ValidationReport {
    ValidationReport::new(
        2,
        vec![
            CellOutcome::new(2, "DIGITAL_IDENTIFIER", Outcome::Valid),
            CellOutcome::new(2, "YEAR", Outcome::Valid),
            CellOutcome::new(
                3,
                "DIGITAL_IDENTIFIER",
                Outcome::hard("Letter number must increment sequentially. Expected 02 but got 03"),
            ),
            CellOutcome::new(3, "YEAR", Outcome::soft("Year, empty")),
        ],
    )
}

#[test]
fn writes_workbook_and_diagnostics() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("Amador.csv");
    let out = dir.path().join("out");
    let paths = OutputPaths::for_input(&input, Some(&out)).expect("paths");
    let (columns, rows) = sheet();

    write_outputs(&paths, None, &columns, &rows, &report()).expect("write outputs");

    assert!(paths.workbook.ends_with("Verified_Amador.xlsx"));
    let mut workbook = open_workbook_auto(&paths.workbook).expect("open workbook");
    let range = workbook.worksheet_range(SHEET_NAME).expect("sheet");
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("DIGITAL_IDENTIFIER".into())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::Float(1898.0)));
    assert_eq!(range.get_value((2, 2)), Some(&Data::String("torn".into())));

    let diagnostics = fs::read_to_string(&paths.diagnostics).expect("diagnostics");
    let lines: Vec<&str> = diagnostics.lines().collect();
    assert_eq!(lines[0], "row,column,status,severity,reason");
    assert_eq!(lines[1], "2,DIGITAL_IDENTIFIER,Valid,,");
    assert_eq!(
        lines[3],
        "3,DIGITAL_IDENTIFIER,Invalid,Hard,Letter number must increment sequentially. Expected 02 but got 03"
    );
    assert_eq!(lines[4], "3,YEAR,Invalid,Soft,\"Year, empty\"");
}

#[test]
fn json_report_lists_failures() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("report.json");
    let report = report();
    let json = JsonReport::new(dir.path().join("Amador.csv").as_path(), ValidationOptions::default(), &report);

    write_json_report(&path, &json).expect("write json");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read json")).expect("parse json");
    assert_eq!(value["rows"], 2);
    assert_eq!(value["hard"], 1);
    assert_eq!(value["soft"], 1);
    assert_eq!(value["failures"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["columns"]["YEAR"]["valid"], 1);
}

#[test]
fn marked_copy_keeps_sheet_name_and_row_positions() {
    let dir = TempDir::new().expect("temp dir");
    let paths = OutputPaths::for_input(&dir.path().join("Amador.xlsx"), None).expect("paths");
    let columns = vec!["DIGITAL_IDENTIFIER".to_string()];
    let rows = vec![
        Row::new(0, vec![("DIGITAL_IDENTIFIER".into(), CellValue::text("Ms0004_01_07_01.pdf"))]),
        Row::new(1, vec![("DIGITAL_IDENTIFIER".into(), CellValue::text("Ms0004_01_07_02.pdf"))])
            .with_sheet_row(4),
    ];
    let report = ValidationReport::new(2, Vec::new());

    write_outputs(&paths, Some("Catalog"), &columns, &rows, &report).expect("write outputs");

    let mut workbook = open_workbook_auto(&paths.workbook).expect("open workbook");
    assert_eq!(workbook.sheet_names(), vec!["Catalog".to_string()]);
    let range = workbook.worksheet_range("Catalog").expect("sheet");
    assert_eq!(range.get_value((1, 0)), Some(&Data::String("Ms0004_01_07_01.pdf".into())));
    assert_eq!(range.get_value((3, 0)), Some(&Data::String("Ms0004_01_07_02.pdf".into())));
}
