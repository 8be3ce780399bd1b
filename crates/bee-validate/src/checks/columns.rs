//! Columns with no values at all.

use bee_model::{ColumnName, Finding, FindingCategory, FindingLocation, Table};

pub fn check(table: &Table, skip: &[ColumnName]) -> Vec<Finding> {
    if table.is_empty() {
        return Vec::new();
    }
    table
        .columns
        .iter()
        .filter(|column| !skip.contains(*column))
        .filter(|column| {
            table
                .rows
                .iter()
                .all(|row| row.get(column.as_str()).is_missing())
        })
        .map(|column| {
            Finding::warning(
                FindingCategory::EmptyColumn,
                FindingLocation::column(column.as_str()),
                format!("column {column} has no values in any row"),
            )
        })
        .collect()
}
