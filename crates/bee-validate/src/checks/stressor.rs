//! Per-row stressor percentage totals.
//!
//! Colonies can be hit by several stressors in one quarter, so totals above
//! 100 are normal; only totals past the configured ceiling are reported.

use bee_model::schema::STRESSOR_COLUMNS;
use bee_model::{Finding, FindingCategory, FindingLocation, Table};

pub fn check(table: &Table, ceiling: f64) -> Vec<Finding> {
    let mut findings = Vec::new();
    for row in &table.rows {
        let present: Vec<f64> = STRESSOR_COLUMNS
            .iter()
            .filter_map(|column| row.get(column).number())
            .collect();
        if present.is_empty() {
            continue;
        }
        let total: f64 = present.iter().sum();
        if total > ceiling {
            findings.push(Finding::warning(
                FindingCategory::StressorSum,
                FindingLocation::row(&row.key),
                format!("stressor percentages sum to {total}, above the {ceiling} ceiling"),
            ));
        }
    }
    findings
}
