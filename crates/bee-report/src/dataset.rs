use std::io::Write;

use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

use bee_model::schema::{PERIOD, STATE};
use bee_model::{MetricValue, Row, Table};

/// One output record, serialized with the table's column order.
pub struct DatasetRecord<'a> {
    table: &'a Table,
    row: &'a Row,
}

impl Serialize for DatasetRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.columns.len() + 2))?;
        map.serialize_entry(STATE, &self.row.key.state)?;
        map.serialize_entry(PERIOD, &self.row.key.period)?;
        for column in &self.table.columns {
            map.serialize_entry(column.as_str(), &self.row.get(column.as_str()))?;
        }
        map.end()
    }
}

pub fn dataset_records(table: &Table) -> Vec<DatasetRecord<'_>> {
    table
        .rows
        .iter()
        .map(|row| DatasetRecord { table, row })
        .collect()
}

/// Writes the dataset as a pretty-printed JSON array of records.
pub fn write_dataset_json<W: Write>(writer: W, table: &Table) -> Result<()> {
    serde_json::to_writer_pretty(writer, &dataset_records(table))
        .context("serialize dataset records")
}

fn format_value(value: MetricValue) -> String {
    match value {
        MetricValue::Number(number) => number.to_string(),
        MetricValue::Missing => String::new(),
    }
}

/// Writes the dataset as CSV with a header row.
pub fn write_dataset_csv<W: Write>(writer: W, table: &Table) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(table.output_columns())
        .context("write dataset header")?;
    for row in &table.rows {
        let mut record = vec![row.key.state.clone(), row.key.period.label()];
        record.extend(
            table
                .columns
                .iter()
                .map(|column| format_value(row.get(column.as_str()))),
        );
        csv.write_record(&record)
            .with_context(|| format!("write dataset row {} {}", row.key.state, row.key.period))?;
    }
    csv.flush().context("flush dataset csv")?;
    Ok(())
}
