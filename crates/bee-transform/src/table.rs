//! Typed table building from a mapped raw table.

use tracing::debug;

use bee_map::ColumnMapping;
use bee_model::schema::{PERIOD, STATE};
use bee_model::{
    ColumnName, Finding, FindingCategory, FindingLocation, MetricValue, Period, RawTable, Row,
    RowKey, Table,
};

use crate::normalize::normalize;

/// Result of building one typed table.
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
    pub table: Table,
    pub findings: Vec<Finding>,
}

/// Applies `mapping` to `raw` and normalizes every metric cell.
///
/// Unparseable cells become missing with a warning. Rows without a state or
/// with an unparseable period are skipped with an error, and a table lacking
/// either key column contributes no rows.
pub fn build_table(raw: &RawTable, mapping: &ColumnMapping) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();
    let mut state_index = None;
    let mut period_index = None;
    let mut metrics: Vec<(usize, ColumnName)> = Vec::new();
    for index in 0..raw.headers.len() {
        let Some(name) = mapping.target_at(index) else {
            continue;
        };
        match name.as_str() {
            STATE => state_index = Some(index),
            PERIOD => period_index = Some(index),
            _ => metrics.push((index, name.clone())),
        }
    }
    outcome.table = Table::new(metrics.iter().map(|(_, name)| name.clone()).collect());

    let (Some(state_index), Some(period_index)) = (state_index, period_index) else {
        let missing: Vec<&str> = [(STATE, state_index), (PERIOD, period_index)]
            .into_iter()
            .filter(|(_, index)| index.is_none())
            .map(|(name, _)| name)
            .collect();
        outcome.findings.push(
            Finding::error(
                FindingCategory::MissingKey,
                FindingLocation::Table,
                format!(
                    "table has no {} column; its {} rows were not used",
                    missing.join("/"),
                    raw.rows.len()
                ),
            )
            .with_source(&raw.source),
        );
        return outcome;
    };

    for (row_number, cells) in raw.rows.iter().enumerate() {
        let cell = |index: usize| cells.get(index).map_or("", String::as_str);
        let state = clean_state_name(cell(state_index));
        if state.is_empty() {
            outcome.findings.push(
                Finding::error(
                    FindingCategory::MissingKey,
                    FindingLocation::Table,
                    format!("row {}: empty state; row skipped", row_number + 1),
                )
                .with_source(&raw.source),
            );
            continue;
        }
        let period = match Period::parse(cell(period_index)) {
            Ok(period) => period,
            Err(error) => {
                outcome.findings.push(
                    Finding::error(
                        FindingCategory::MissingKey,
                        FindingLocation::Table,
                        format!("row {} ({state}): {error}; row skipped", row_number + 1),
                    )
                    .with_source(&raw.source),
                );
                continue;
            }
        };

        let key = RowKey::new(state, period);
        let mut row = Row::new(key.clone());
        for (index, column) in &metrics {
            let value = match normalize(cell(*index)) {
                Ok(value) => value,
                Err(error) => {
                    outcome.findings.push(
                        Finding::warning(
                            FindingCategory::UnparseableValue,
                            FindingLocation::cell(&key, column.as_str()),
                            format!("{error}; recorded as missing"),
                        )
                        .with_source(&raw.source),
                    );
                    MetricValue::Missing
                }
            };
            row.values.insert(column.clone(), value);
        }
        outcome.table.push_row(row);
    }

    debug!(
        source = %raw.source,
        rows = outcome.table.len(),
        columns = outcome.table.columns.len(),
        findings = outcome.findings.len(),
        "built table"
    );
    outcome
}

/// Trims a state label and drops trailing USDA footnote references (`4/`)
/// and dot leaders.
pub fn clean_state_name(raw: &str) -> String {
    let mut tokens: Vec<&str> = raw.split_whitespace().collect();
    while let Some(last) = tokens.last() {
        let footnote = last.len() > 1
            && last.ends_with('/')
            && last[..last.len() - 1].chars().all(|ch| ch.is_ascii_digit());
        let leader = last.len() > 1 && last.chars().all(|ch| ch == '.');
        if footnote || leader {
            tokens.pop();
        } else {
            break;
        }
    }
    let joined = tokens.join(" ");
    if joined.ends_with("..") {
        joined.trim_end_matches('.').trim_end().to_string()
    } else {
        joined
    }
}
