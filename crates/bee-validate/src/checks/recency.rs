//! Dataset freshness, reported once per table.

use chrono::{Months, NaiveDate};

use bee_model::{Finding, FindingCategory, FindingLocation, Table};

pub fn check(table: &Table, today: NaiveDate, threshold_years: u32) -> Vec<Finding> {
    let Some(latest) = table.latest_period() else {
        return Vec::new();
    };
    let Some(cutoff) = today.checked_sub_months(Months::new(threshold_years.saturating_mul(12)))
    else {
        return Vec::new();
    };
    if latest.start() >= cutoff {
        return Vec::new();
    }
    vec![Finding::warning(
        FindingCategory::Stale,
        FindingLocation::Table,
        format!(
            "most recent period {latest} is older than {threshold_years} year(s) before {today}"
        ),
    )]
}
