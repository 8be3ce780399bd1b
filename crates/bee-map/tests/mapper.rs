//! Integration tests for column mapping.

use bee_map::{ColumnTarget, map_columns};
use bee_model::schema::CANONICAL_COLUMNS;
use bee_model::{FindingCategory, PipelineOptions, Severity};
use proptest::prelude::*;

#[test]
fn maps_lost_colonies_variants_to_one_name() {
    let options = PipelineOptions::default();
    for header in ["Lost colonies", "lost_colonies", "Colonies Lost", "LOST   COLONIES"] {
        let mapping = map_columns(&[header], &options);
        assert_eq!(
            mapping.get(header).map(|name| name.as_str()),
            Some("Lost_colonies"),
            "header {header:?}"
        );
        assert!(mapping.findings().is_empty());
    }
}

#[test]
fn drops_excluded_bookkeeping_columns() {
    let options = PipelineOptions::default();
    let mapping = map_columns(&["Table", "State", "Month", "Colonies"], &options);

    assert_eq!(mapping.entries()[0].target, ColumnTarget::Excluded);
    assert_eq!(mapping.entries()[2].target, ColumnTarget::Excluded);
    let outputs: Vec<&str> = mapping
        .output_columns()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(outputs, vec!["State", "Starting_Colonies"]);
    assert!(mapping.findings().is_empty());
}

#[test]
fn keeps_unmapped_column_with_warning() {
    let options = PipelineOptions::default();
    let mapping = map_columns(&["State", "Hive  beetles"], &options);

    assert_eq!(
        mapping.get("Hive  beetles").map(|name| name.as_str()),
        Some("Hive_beetles")
    );
    let findings = mapping.findings();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity, Severity::Warning);
    assert_eq!(findings[0].category, FindingCategory::UnmappedColumn);
    assert!(findings[0].message.contains("unmapped column retained"));
}

#[test]
fn suggests_closest_canonical_for_near_miss() {
    let options = PipelineOptions::default();
    let mapping = map_columns(&["Pesticide"], &options);

    assert!(
        mapping.findings()[0]
            .message
            .contains("closest canonical: Pesticides")
    );
}

#[test]
fn duplicate_canonical_keeps_first() {
    let options = PipelineOptions::default();
    let mapping = map_columns(&["Lost colonies", "Colonies Lost"], &options);

    assert_eq!(
        mapping.target_at(0).map(|name| name.as_str()),
        Some("Lost_colonies")
    );
    assert_eq!(mapping.target_at(1), None);
    assert_eq!(
        mapping.findings()[0].category,
        FindingCategory::DuplicateColumn
    );
}

#[test]
fn alias_overrides_apply() {
    let options = PipelineOptions::default().with_aliases([("Colonies dead", "Lost_colonies")]);
    let mapping = map_columns(&["Colonies dead"], &options);

    assert_eq!(
        mapping.get("Colonies dead").map(|name| name.as_str()),
        Some("Lost_colonies")
    );
}

#[test]
fn mapping_ignores_header_order_for_names() {
    let options = PipelineOptions::default();
    let forward = map_columns(&["State", "Lost colonies", "Percent lost"], &options);
    let backward = map_columns(&["Percent lost", "Lost colonies", "State"], &options);

    assert_eq!(forward.as_map(), backward.as_map());
}

proptest! {
    #[test]
    fn canonical_headers_map_to_themselves(
        picks in proptest::sample::subsequence(
            CANONICAL_COLUMNS.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            0..CANONICAL_COLUMNS.len(),
        )
    ) {
        let options = PipelineOptions::default();
        let mapping = map_columns(&picks, &options);

        for name in &picks {
            prop_assert_eq!(mapping.get(name).map(|n| n.as_str()), Some(*name));
        }
        prop_assert!(mapping.findings().is_empty());
    }

    #[test]
    fn mapping_is_idempotent(headers in proptest::collection::vec("[A-Za-z]{1,8}( [A-Za-z]{1,8})?", 1..6)) {
        let options = PipelineOptions::default();
        let first = map_columns(&headers, &options);
        let once: Vec<String> = first
            .output_columns()
            .into_iter()
            .map(|name| name.as_str().to_string())
            .collect();
        let second = map_columns(&once, &options);
        let twice: Vec<String> = second
            .output_columns()
            .into_iter()
            .map(|name| name.as_str().to_string())
            .collect();

        prop_assert_eq!(once, twice);
    }
}
