use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use bee_map::{ColumnMapping, ColumnTarget};
use bee_model::{Finding, FindingLocation, Severity};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input_dir.display());
    match &result.outputs {
        Some(outputs) => {
            println!("Output: {}", result.output_dir.display());
            println!("Validation report: {}", outputs.report.display());
            if !outputs.dataset_written() {
                println!("Dataset not written: validation errors (use --allow-errors to override)");
            }
        }
        None => println!("Dry run: no files written"),
    }

    let summary = &result.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tables"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("States"),
        header_cell("Periods"),
        header_cell("Errors"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in [0, 1, 2, 3, 5, 6] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let periods = match (&summary.period_range.earliest, &summary.period_range.latest) {
        (Some(earliest), Some(latest)) => format!("{earliest} to {latest}"),
        _ => "-".to_string(),
    };
    table.add_row(vec![
        Cell::new(result.table_count),
        Cell::new(summary.total_rows).add_attribute(Attribute::Bold),
        Cell::new(summary.total_columns),
        Cell::new(summary.states.len()),
        Cell::new(periods),
        count_cell(summary.errors, Color::Red),
        count_cell(summary.warnings, Color::Yellow),
    ]);
    println!("{table}");
    if let Some(outputs) = &result.outputs {
        print_outputs(&[
            ("Dataset (JSON)", outputs.dataset_json.as_deref()),
            ("Dataset (CSV)", outputs.dataset_csv.as_deref()),
            ("Summary", Some(outputs.summary.as_path())),
            ("Column mappings", Some(outputs.mappings.as_path())),
        ]);
    }
    print_finding_table(&result.report.findings);
}

fn print_outputs(files: &[(&str, Option<&Path>)]) {
    for (label, path) in files {
        match path {
            Some(path) => println!("{label}: {}", path.display()),
            None => println!("{label}: -"),
        }
    }
}

fn print_finding_table(findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let mut ordered: Vec<&Finding> = findings.iter().collect();
    ordered.sort_by_key(|finding| (severity_rank(finding.severity), finding.category));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Category"),
        header_cell("Location"),
        header_cell("Message"),
        header_cell("Source"),
    ]);
    apply_finding_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for finding in ordered {
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(finding.category.label()),
            Cell::new(location_label(&finding.location)),
            Cell::new(&finding.message),
            finding
                .source
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!();
    println!("Findings:");
    println!("{table}");
}

pub fn print_mapping(mapping: &ColumnMapping) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Header"),
        header_cell("Column"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    for entry in mapping.entries() {
        let (column, status) = match &entry.target {
            ColumnTarget::Canonical(name) => {
                (Cell::new(name), Cell::new("mapped").fg(Color::Green))
            }
            ColumnTarget::Unmapped(name) => {
                (Cell::new(name), Cell::new("unmapped").fg(Color::Yellow))
            }
            ColumnTarget::Excluded => (dim_cell("-"), dim_cell("excluded")),
            ColumnTarget::Duplicate(name) => {
                (Cell::new(name), Cell::new("duplicate").fg(Color::Yellow))
            }
        };
        table.add_row(vec![Cell::new(&entry.raw), column, status]);
    }
    println!("{table}");
    for finding in mapping.findings() {
        println!("warning: {}", finding.message);
    }
}

fn location_label(location: &FindingLocation) -> String {
    match location {
        FindingLocation::Table => "table".to_string(),
        FindingLocation::Column { column } => column.clone(),
        FindingLocation::Row {
            state,
            period,
            column: Some(column),
        } => format!("{state} {period} {column}"),
        FindingLocation::Row {
            state,
            period,
            column: None,
        } => format!("{state} {period}"),
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_finding_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::UpperBoundary(Width::Fixed(36)),
            ColumnConstraint::UpperBoundary(Width::Percentage(50)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Error => 0,
        Severity::Warning => 1,
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
