//! Tests for bee-model types.

use bee_model::{
    ColumnName, Finding, FindingCategory, FindingLocation, MetricValue, Period, PipelineOptions,
    Row, RowKey, Table, ValidationReport,
};

fn key(state: &str, period: &str) -> RowKey {
    RowKey::new(state, Period::parse(period).expect("period"))
}

#[test]
fn push_row_fills_missing_columns() {
    let mut table = Table::new(vec![
        ColumnName::known("Starting_Colonies"),
        ColumnName::known("Max_Colonies"),
    ]);
    table.push_row(
        Row::new(key("Alabama", "2023-Q1"))
            .with_value(ColumnName::known("Starting_Colonies"), 100.0),
    );

    let row = &table.rows[0];
    assert_eq!(row.get("Starting_Colonies"), MetricValue::Number(100.0));
    assert_eq!(row.get("Max_Colonies"), MetricValue::Missing);
    assert_eq!(row.values.len(), 2);
}

#[test]
fn with_missing_column_leaves_original_untouched() {
    let mut table = Table::new(vec![ColumnName::known("Starting_Colonies")]);
    table.push_row(Row::new(key("Alabama", "2023-Q1")));

    let extended = table.with_missing_column(ColumnName::known("Percent_lost"));

    assert!(!table.has_column("Percent_lost"));
    assert!(extended.has_column("Percent_lost"));
    assert!(extended.rows[0].get("Percent_lost").is_missing());
}

#[test]
fn latest_period_spans_states() {
    let mut table = Table::new(Vec::new());
    table.push_row(Row::new(key("Alabama", "2021-Q4")));
    table.push_row(Row::new(key("Texas", "2022-Q2")));
    table.push_row(Row::new(key("Texas", "2020-Q1")));

    assert_eq!(table.latest_period().map(|p| p.label()), Some("2022-Q2".to_string()));
    assert_eq!(table.earliest_period().map(|p| p.label()), Some("2020-Q1".to_string()));
}

#[test]
fn column_name_rejects_blank() {
    assert!(ColumnName::new("   ").is_err());
    assert_eq!(ColumnName::new(" State ").unwrap().as_str(), "State");
}

#[test]
fn finding_serializes_with_scope() {
    let finding = Finding::warning(
        FindingCategory::MergeOverwrite,
        FindingLocation::cell(&key("AL", "2023-Q1"), "Starting_Colonies"),
        "overwritten conflicting value",
    );
    let json = serde_json::to_value(&finding).expect("serialize finding");

    assert_eq!(json["severity"], "warning");
    assert_eq!(json["category"], "merge_overwrite");
    assert_eq!(json["location"]["scope"], "row");
    assert_eq!(json["location"]["period"], "2023-Q1");
    assert_eq!(json["location"]["column"], "Starting_Colonies");
    assert!(json.get("source").is_none());
}

#[test]
fn report_groups_by_category() {
    let report: ValidationReport = vec![
        Finding::error(FindingCategory::OutOfRange, FindingLocation::Table, "a"),
        Finding::error(FindingCategory::OutOfRange, FindingLocation::Table, "b"),
        Finding::warning(FindingCategory::Stale, FindingLocation::Table, "c"),
    ]
    .into_iter()
    .collect();

    let counts = report.by_category();
    assert_eq!(counts.get(&FindingCategory::OutOfRange), Some(&2));
    assert_eq!(counts.get(&FindingCategory::Stale), Some(&1));
}

#[test]
fn alias_overrides_extend_defaults() {
    let options = PipelineOptions::default().with_aliases([("Colonies  Dead", "Lost_colonies")]);

    assert_eq!(
        options.column_aliases.get("colonies_dead").map(String::as_str),
        Some("Lost_colonies")
    );
    assert_eq!(
        options.column_aliases.get("lost_colonies").map(String::as_str),
        Some("Lost_colonies")
    );
    assert_eq!(options.staleness_threshold_years, 2);
    assert!((options.stressor_sum_ceiling - 150.0).abs() < f64::EPSILON);
}
