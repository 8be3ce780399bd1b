//! Required column presence.

use bee_model::{ColumnName, Finding, FindingCategory, FindingLocation, Table};

/// Table with every required column present, plus what was added.
pub struct SchemaOutcome {
    pub table: Table,
    pub synthesized: Vec<ColumnName>,
    pub findings: Vec<Finding>,
}

pub fn check(table: &Table, required: &[String]) -> SchemaOutcome {
    let mut corrected = table.clone();
    let mut synthesized = Vec::new();
    let mut findings = Vec::new();
    for name in required {
        if corrected.has_column(name) {
            continue;
        }
        let Ok(column) = ColumnName::new(name.as_str()) else {
            continue;
        };
        findings.push(Finding::error(
            FindingCategory::RequiredColumnMissing,
            FindingLocation::column(column.as_str()),
            format!("required column {column} is missing; added with all values missing"),
        ));
        corrected = corrected.with_missing_column(column.clone());
        synthesized.push(column);
    }
    SchemaOutcome {
        table: corrected,
        synthesized,
        findings,
    }
}
