//! Tests for key-based table merging.

use std::collections::BTreeSet;

use bee_model::{ColumnName, FindingCategory, MetricValue, Period, Row, RowKey, Severity, Table};
use bee_transform::merge;

fn key(state: &str, period: &str) -> RowKey {
    RowKey::new(state, Period::parse(period).expect("period"))
}

fn table(column: &'static str, rows: &[(&str, &str, f64)]) -> Table {
    let name = ColumnName::known(column);
    let mut table = Table::new(vec![name.clone()]);
    for (state, period, value) in rows {
        table.push_row(Row::new(key(state, period)).with_value(name.clone(), *value));
    }
    table
}

fn keys(table: &Table) -> BTreeSet<RowKey> {
    table.rows.iter().map(|row| row.key.clone()).collect()
}

#[test]
fn later_table_wins_conflicts_with_warning() {
    let a = table("Starting_Colonies", &[("AL", "2023-Q1", 100.0)]);
    let b = table("Starting_Colonies", &[("AL", "2023-Q1", 110.0)]);

    let outcome = merge(&[a, b]);

    let row = outcome.table.row(&key("AL", "2023-Q1")).expect("row");
    assert_eq!(row.get("Starting_Colonies"), MetricValue::Number(110.0));
    assert_eq!(outcome.findings.len(), 1);
    assert_eq!(outcome.findings[0].severity, Severity::Warning);
    assert_eq!(outcome.findings[0].category, FindingCategory::MergeOverwrite);
    assert!(outcome.findings[0].message.contains("overwritten conflicting value"));
}

#[test]
fn month_and_first_day_labels_share_one_row() {
    let release = table("Starting_Colonies", &[("Alabama", "2015-01", 7000.0)]);
    let export = table("Starting_Colonies", &[("Alabama", "2015-01-01", 7500.0)]);

    let outcome = merge(&[release, export]);

    assert_eq!(outcome.table.len(), 1);
    let row = &outcome.table.rows[0];
    assert_eq!(row.key.period.label(), "2015-01");
    assert_eq!(row.get("Starting_Colonies"), MetricValue::Number(7500.0));
    assert_eq!(outcome.findings.len(), 1);
    assert_eq!(outcome.findings[0].category, FindingCategory::MergeOverwrite);
}

#[test]
fn merge_is_not_commutative_on_conflicts() {
    let a = table("Starting_Colonies", &[("AL", "2023-Q1", 100.0)]);
    let b = table("Starting_Colonies", &[("AL", "2023-Q1", 110.0)]);

    let ab = merge(&[a.clone(), b.clone()]).table;
    let ba = merge(&[b, a]).table;

    assert_eq!(keys(&ab), keys(&ba));
    let alabama = key("AL", "2023-Q1");
    assert_eq!(ab.row(&alabama).unwrap().get("Starting_Colonies"), MetricValue::Number(110.0));
    assert_eq!(ba.row(&alabama).unwrap().get("Starting_Colonies"), MetricValue::Number(100.0));
}

#[test]
fn merge_key_set_is_associative() {
    let a = table("Starting_Colonies", &[("AL", "2023-Q1", 1.0), ("TX", "2023-Q1", 2.0)]);
    let b = table("Lost_colonies", &[("AL", "2023-Q2", 3.0), ("TX", "2023-Q1", 4.0)]);
    let c = table("Percent_lost", &[("CA", "2022-Q4", 5.0), ("AL", "2023-Q1", 6.0)]);

    let left = merge(&[merge(&[a.clone(), b.clone()]).table, c.clone()]).table;
    let right = merge(&[a.clone(), merge(&[b.clone(), c.clone()]).table]).table;
    let flat = merge(&[a, b, c]).table;

    assert_eq!(keys(&left), keys(&right));
    assert_eq!(keys(&left), keys(&flat));
    assert_eq!(flat.len(), 4);
}

#[test]
fn outer_union_fills_missing_columns() {
    let a = table("Starting_Colonies", &[("AL", "2023-Q1", 100.0)]);
    let b = table("Varroa_mites", &[("AK", "2023-Q1", 12.5)]);

    let merged = merge(&[a, b]).table;

    let names: Vec<&str> = merged.columns.iter().map(ColumnName::as_str).collect();
    assert_eq!(names, vec!["Starting_Colonies", "Varroa_mites"]);
    let al = merged.row(&key("AL", "2023-Q1")).unwrap();
    assert!(al.get("Varroa_mites").is_missing());
    let ak = merged.row(&key("AK", "2023-Q1")).unwrap();
    assert!(ak.get("Starting_Colonies").is_missing());
    assert_eq!(ak.values.len(), 2);
}

#[test]
fn missing_never_overwrites_present_value() {
    let a = table("Starting_Colonies", &[("AL", "2023-Q1", 100.0)]);
    let mut b = Table::new(vec![ColumnName::known("Starting_Colonies")]);
    b.push_row(Row::new(key("AL", "2023-Q1")));

    let outcome = merge(&[a, b]);

    let row = outcome.table.row(&key("AL", "2023-Q1")).unwrap();
    assert_eq!(row.get("Starting_Colonies"), MetricValue::Number(100.0));
    assert!(outcome.findings.is_empty());
}

#[test]
fn equal_values_do_not_warn() {
    let a = table("Starting_Colonies", &[("AL", "2023-Q1", 100.0)]);
    let outcome = merge(&[a.clone(), a]);

    assert_eq!(outcome.table.len(), 1);
    assert!(outcome.findings.is_empty());
}

#[test]
fn rows_ordered_by_first_state_then_period() {
    let a = table(
        "Starting_Colonies",
        &[("TX", "2023-Q2", 1.0), ("AL", "2023-Q3", 2.0), ("TX", "2022-Q4", 3.0)],
    );
    let b = table("Starting_Colonies", &[("AL", "2023-Q1", 4.0), ("CA", "2020-Q1", 5.0)]);

    let merged = merge(&[a, b]).table;

    let order: Vec<(String, String)> = merged
        .rows
        .iter()
        .map(|row| (row.key.state.clone(), row.key.period.label()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("TX".to_string(), "2022-Q4".to_string()),
            ("TX".to_string(), "2023-Q2".to_string()),
            ("AL".to_string(), "2023-Q1".to_string()),
            ("AL".to_string(), "2023-Q3".to_string()),
            ("CA".to_string(), "2020-Q1".to_string()),
        ]
    );
}

#[test]
fn duplicate_keys_within_one_table_keep_last() {
    let a = table(
        "Starting_Colonies",
        &[("AL", "2023-Q1", 100.0), ("AL", "2023-Q1", 105.0)],
    );

    let outcome = merge(&[a]);

    assert_eq!(outcome.table.len(), 1);
    assert_eq!(
        outcome.table.rows[0].get("Starting_Colonies"),
        MetricValue::Number(105.0)
    );
    assert_eq!(outcome.findings.len(), 1);
}

#[test]
fn empty_input_merges_to_empty_table() {
    let outcome = merge(&[]);
    assert!(outcome.table.is_empty());
    assert!(outcome.table.columns.is_empty());
}
