use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{PERIOD, STATE};
use crate::{ColumnName, Period};

/// A metric cell: a number or an explicit missing marker.
///
/// Serializes as a JSON number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    #[default]
    Missing,
}

impl MetricValue {
    pub fn number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Option<f64>> for MetricValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Identity of an observation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowKey {
    pub state: String,
    pub period: Period,
}

impl RowKey {
    pub fn new(state: impl Into<String>, period: Period) -> Self {
        Self {
            state: state.into(),
            period,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: RowKey,
    pub values: BTreeMap<ColumnName, MetricValue>,
}

impl Row {
    pub fn new(key: RowKey) -> Self {
        Self {
            key,
            values: BTreeMap::new(),
        }
    }

    /// Value of `column`, missing when the row has no such column.
    pub fn get(&self, column: &str) -> MetricValue {
        self.values.get(column).copied().unwrap_or_default()
    }

    pub fn with_value(mut self, column: ColumnName, value: impl Into<MetricValue>) -> Self {
        self.values.insert(column, value.into());
        self
    }
}

/// Typed table of observations over a fixed metric column set.
///
/// `columns` lists metric columns only; the key columns live in [`RowKey`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<ColumnName>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<ColumnName>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, filling every table column the row lacks with missing.
    pub fn push_row(&mut self, mut row: Row) {
        for column in &self.columns {
            row.values.entry(column.clone()).or_default();
        }
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names as written out: `State`, `Period`, then the metrics.
    pub fn output_columns(&self) -> Vec<&str> {
        [STATE, PERIOD]
            .into_iter()
            .chain(self.columns.iter().map(ColumnName::as_str))
            .collect()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c.as_str() == column)
    }

    pub fn row(&self, key: &RowKey) -> Option<&Row> {
        self.rows.iter().find(|row| &row.key == key)
    }

    /// Returns a copy with `column` appended and set to missing in every row.
    pub fn with_missing_column(&self, column: ColumnName) -> Self {
        let mut table = self.clone();
        if table.has_column(column.as_str()) {
            return table;
        }
        for row in &mut table.rows {
            row.values.insert(column.clone(), MetricValue::Missing);
        }
        table.columns.push(column);
        table
    }

    pub fn latest_period(&self) -> Option<Period> {
        self.rows.iter().map(|row| row.key.period).max()
    }

    pub fn earliest_period(&self) -> Option<Period> {
        self.rows.iter().map(|row| row.key.period).min()
    }
}

/// Untyped table as read from a delimited file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Where the table came from (file path or test label).
    pub source: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(source: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            source: source.into(),
            headers,
            rows,
        }
    }
}
