use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use catalog_cli::types::VerifyResult;
use catalog_model::{CellOutcome, Severity};

/// Failures printed to the terminal; the diagnostics file has all of them.
const MAX_LISTED_FAILURES: usize = 50;

pub fn print_summary(result: &VerifyResult) {
    println!("Input: {}", result.input.display());
    println!("Marked workbook: {}", result.outputs.workbook.display());
    println!("Diagnostics: {}", result.outputs.diagnostics.display());
    if let Some(path) = &result.json_report {
        println!("JSON report: {}", path.display());
    }
    println!("Rows: {}", result.report.rows);
    if !result.unchecked_columns.is_empty() {
        println!("Not checked: {}", result.unchecked_columns.join(", "));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Valid"),
        header_cell("Hard"),
        header_cell("Soft"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let by_column = result.report.by_column();
    for (column, summary) in &by_column {
        table.add_row(vec![
            Cell::new(column).fg(Color::Blue),
            count_cell(summary.valid, Color::Green),
            count_cell(summary.hard, Color::Red),
            count_cell(summary.soft, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.report.valid_count(), Color::Green).add_attribute(Attribute::Bold),
        count_cell(result.report.hard_count(), Color::Red).add_attribute(Attribute::Bold),
        count_cell(result.report.soft_count(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_failure_table(&result.report.outcomes);
}

fn print_failure_table(outcomes: &[CellOutcome]) {
    let mut failures: Vec<&CellOutcome> = outcomes
        .iter()
        .filter(|outcome| !outcome.outcome.is_valid())
        .collect();
    if failures.is_empty() {
        return;
    }
    // Hard first, then worksheet order.
    failures.sort_by_key(|outcome| {
        (
            outcome.outcome.severity() != Some(Severity::Hard),
            outcome.row,
        )
    });

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Severity"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Percentage(55)),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for outcome in failures.iter().take(MAX_LISTED_FAILURES) {
        table.add_row(vec![
            Cell::new(outcome.row),
            Cell::new(outcome.marked_column()),
            severity_cell(outcome.outcome.severity()),
            Cell::new(outcome.outcome.reason().unwrap_or_default()),
        ]);
    }
    println!();
    println!("Failures:");
    println!("{table}");
    if failures.len() > MAX_LISTED_FAILURES {
        println!(
            "... {} more in the diagnostics file",
            failures.len() - MAX_LISTED_FAILURES
        );
    }
}

fn severity_cell(severity: Option<Severity>) -> Cell {
    match severity {
        Some(Severity::Hard) => Cell::new("HARD")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Some(Severity::Soft) => Cell::new("SOFT").fg(Color::Yellow),
        None => dim_cell("-"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
