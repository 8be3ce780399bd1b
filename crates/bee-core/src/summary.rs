//! Dataset summary for the run output.

use std::collections::BTreeSet;

use serde::Serialize;

use bee_model::{Table, ValidationReport};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

/// Shape and coverage of the final dataset plus finding counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub total_rows: usize,
    /// Includes the `State` and `Period` key columns.
    pub total_columns: usize,
    pub columns: Vec<String>,
    pub period_range: PeriodRange,
    pub states: Vec<String>,
    pub errors: usize,
    pub warnings: usize,
}

impl DatasetSummary {
    pub fn from_table(table: &Table, report: &ValidationReport) -> Self {
        let columns: Vec<String> = table
            .output_columns()
            .into_iter()
            .map(str::to_string)
            .collect();
        let states: BTreeSet<&str> = table
            .rows
            .iter()
            .map(|row| row.key.state.as_str())
            .collect();
        Self {
            total_rows: table.len(),
            total_columns: columns.len(),
            columns,
            period_range: PeriodRange {
                earliest: table.earliest_period().map(|period| period.label()),
                latest: table.latest_period().map(|period| period.label()),
            },
            states: states.into_iter().map(str::to_string).collect(),
            errors: report.error_count(),
            warnings: report.warning_count(),
        }
    }
}
