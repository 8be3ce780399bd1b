//! Full outer union of typed tables keyed by (state, period).
//!
//! Tables are applied in the order given. When two sources carry different
//! non-missing values for the same key and column, the later source wins and
//! a warning records the overwrite. A missing value never replaces a present
//! one. Duplicate keys inside a single table follow the same rule, so a
//! re-published release overrides the history it repeats.

use std::collections::BTreeMap;

use tracing::debug;

use bee_model::{
    ColumnName, Finding, FindingCategory, FindingLocation, MetricValue, Period, Row, RowKey, Table,
};

#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    pub table: Table,
    pub findings: Vec<Finding>,
}

type PeriodValues = BTreeMap<Period, BTreeMap<ColumnName, MetricValue>>;

pub fn merge(tables: &[Table]) -> MergeOutcome {
    let mut columns: Vec<ColumnName> = Vec::new();
    let mut state_order: Vec<String> = Vec::new();
    let mut by_state: BTreeMap<String, PeriodValues> = BTreeMap::new();
    let mut findings = Vec::new();

    for (table_index, table) in tables.iter().enumerate() {
        for column in &table.columns {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
        for row in &table.rows {
            if !by_state.contains_key(&row.key.state) {
                state_order.push(row.key.state.clone());
            }
            let values = by_state
                .entry(row.key.state.clone())
                .or_default()
                .entry(row.key.period)
                .or_default();
            for (column, incoming) in &row.values {
                let current = values.get(column).copied().unwrap_or_default();
                match (current, *incoming) {
                    (MetricValue::Number(_), MetricValue::Missing) => {}
                    (MetricValue::Number(existing), MetricValue::Number(new))
                        if existing != new =>
                    {
                        findings.push(Finding::warning(
                            FindingCategory::MergeOverwrite,
                            FindingLocation::cell(&row.key, column.as_str()),
                            format!(
                                "overwritten conflicting value: {existing} replaced by {new} from table {}",
                                table_index + 1
                            ),
                        ));
                        values.insert(column.clone(), *incoming);
                    }
                    _ => {
                        values.insert(column.clone(), *incoming);
                    }
                }
            }
        }
    }

    let mut merged = Table::new(columns);
    for state in state_order {
        let Some(periods) = by_state.remove(&state) else {
            continue;
        };
        for (period, values) in periods {
            merged.push_row(Row {
                key: RowKey::new(state.clone(), period),
                values,
            });
        }
    }

    debug!(
        tables = tables.len(),
        rows = merged.len(),
        columns = merged.columns.len(),
        overwrites = findings.len(),
        "merged tables"
    );
    MergeOutcome {
        table: merged,
        findings,
    }
}
