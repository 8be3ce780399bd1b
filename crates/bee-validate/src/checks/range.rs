//! Value range checks. Out-of-range values are reported, never clamped.

use bee_model::schema::{ColumnKind, column_kind};
use bee_model::{Finding, FindingCategory, FindingLocation, Table};

pub fn check(table: &Table) -> Vec<Finding> {
    let mut findings = Vec::new();
    for column in &table.columns {
        let Some(kind) = column_kind(column.as_str()) else {
            continue;
        };
        for row in &table.rows {
            let Some(value) = row.get(column.as_str()).number() else {
                continue;
            };
            let message = match kind {
                ColumnKind::Count if value < 0.0 => {
                    format!("{column} = {value} is negative; colony counts must be >= 0")
                }
                _ if kind.is_percentage() && !(0.0..=100.0).contains(&value) => {
                    format!("{column} = {value} is out of range [0,100]")
                }
                _ => continue,
            };
            findings.push(Finding::error(
                FindingCategory::OutOfRange,
                FindingLocation::cell(&row.key, column.as_str()),
                message,
            ));
        }
    }
    findings
}
