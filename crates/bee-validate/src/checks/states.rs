//! State labels outside the 50 states, DC and the USDA aggregates.

use std::collections::BTreeMap;

use bee_model::schema::{STATE, is_known_state};
use bee_model::{Finding, FindingCategory, FindingLocation, Table};

pub fn check(table: &Table) -> Vec<Finding> {
    let mut unknown: BTreeMap<&str, usize> = BTreeMap::new();
    for row in &table.rows {
        if !is_known_state(&row.key.state) {
            *unknown.entry(row.key.state.as_str()).or_insert(0) += 1;
        }
    }
    unknown
        .into_iter()
        .map(|(state, count)| {
            Finding::warning(
                FindingCategory::UnknownState,
                FindingLocation::column(STATE),
                format!("unrecognized state {state:?} in {count} row(s)"),
            )
        })
        .collect()
}
