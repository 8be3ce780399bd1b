//! Table validation.
//!
//! ## Errors
//!
//! - **Required column missing**: the column is added as all-missing so the
//!   output schema stays stable.
//! - **Out of range**: negative colony counts, percentages outside `[0, 100]`.
//!
//! ## Warnings
//!
//! - **Inconsistent**: `Max_Colonies` below `Starting_Colonies`.
//! - **Stale**: latest period older than the staleness threshold.
//! - **Stressor sum**: row stressor total above the configured ceiling.
//! - **Unknown state**: state label that is neither a state, DC nor a USDA
//!   aggregate.
//! - **Empty column**: a column with no values in any row.

use chrono::{Local, NaiveDate};
use tracing::debug;

use bee_model::{PipelineOptions, Table, ValidationReport};

use crate::checks;

/// Validation context.
pub struct Validator<'a> {
    options: &'a PipelineOptions,
    today: NaiveDate,
}

impl<'a> Validator<'a> {
    /// Create a validator measuring recency against the local date.
    pub fn new(options: &'a PipelineOptions) -> Self {
        Self {
            options,
            today: Local::now().date_naive(),
        }
    }

    /// Measure recency against a fixed date instead of today.
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Validate a merged table.
    ///
    /// Returns the corrected table (required columns present) and every
    /// finding. The input is never modified.
    pub fn validate(&self, table: &Table) -> (Table, ValidationReport) {
        let mut report = ValidationReport::new();

        let schema = checks::schema::check(table, &self.options.required_columns);
        report.extend(schema.findings);
        let corrected = schema.table;

        report.extend(checks::range::check(&corrected));
        report.extend(checks::consistency::check(&corrected));
        report.extend(checks::recency::check(
            &corrected,
            self.today,
            self.options.staleness_threshold_years,
        ));
        report.extend(checks::stressor::check(
            &corrected,
            self.options.stressor_sum_ceiling,
        ));
        report.extend(checks::states::check(&corrected));
        report.extend(checks::columns::check(&corrected, &schema.synthesized));

        debug!(
            rows = corrected.len(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "validated table"
        );
        (corrected, report)
    }
}

/// Validate with the local date as the recency reference.
pub fn validate(table: &Table, options: &PipelineOptions) -> (Table, ValidationReport) {
    Validator::new(options).validate(table)
}
