//! Data model shared by every stage of the honey-bee colony pipeline.

pub mod error;
pub mod finding;
pub mod ids;
pub mod options;
pub mod period;
pub mod schema;
pub mod table;

pub use error::{ModelError, Result};
pub use finding::{Finding, FindingCategory, FindingLocation, Severity, ValidationReport};
pub use ids::ColumnName;
pub use options::PipelineOptions;
pub use period::{Period, PeriodKind};
pub use schema::ColumnKind;
pub use table::{MetricValue, RawTable, Row, RowKey, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_counts() {
        let mut report = ValidationReport::new();
        report.push(Finding::error(
            FindingCategory::OutOfRange,
            FindingLocation::column("Percent_lost"),
            "out of range [0,100]",
        ));
        report.push(Finding::warning(
            FindingCategory::Stale,
            FindingLocation::Table,
            "latest period is old",
        ));
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn missing_metric_serializes_as_null() {
        let json = serde_json::to_string(&vec![MetricValue::Number(1.5), MetricValue::Missing])
            .expect("serialize metrics");
        assert_eq!(json, "[1.5,null]");
    }
}
