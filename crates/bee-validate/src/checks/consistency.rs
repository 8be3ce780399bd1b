//! Cross-field consistency.
//!
//! The maximum colony count of a period should not be below the starting
//! count. USDA revisions can produce such rows legitimately, so this is a
//! warning.

use bee_model::schema::{MAX_COLONIES, STARTING_COLONIES};
use bee_model::{Finding, FindingCategory, FindingLocation, Table};

pub fn check(table: &Table) -> Vec<Finding> {
    let mut findings = Vec::new();
    for row in &table.rows {
        let (Some(starting), Some(max)) = (
            row.get(STARTING_COLONIES).number(),
            row.get(MAX_COLONIES).number(),
        ) else {
            continue;
        };
        if max < starting {
            findings.push(Finding::warning(
                FindingCategory::Inconsistent,
                FindingLocation::row(&row.key),
                format!("max < starting: {MAX_COLONIES} {max} is below {STARTING_COLONIES} {starting}"),
            ));
        }
    }
    findings
}
