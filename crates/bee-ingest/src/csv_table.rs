//! Delimited file reading and layout detection.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{info, warn};

use bee_model::RawTable;
use bee_model::schema::collapse_whitespace;

use crate::error::{IngestError, Result};
use crate::usda::{self, MARKER_COLUMN};

/// Shape of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvLayout {
    /// USDA release table: table number, row-type marker, then cells.
    Usda,
    /// Header row followed by data rows.
    Flat,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Reads all non-blank records of a CSV file without a header row.
///
/// Records may have differing lengths. Bytes that are not valid UTF-8 are
/// replaced rather than rejected.
pub fn read_csv_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut records = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(csv_error)?;
        let row: Vec<String> = record
            .iter()
            .map(|field| normalize_cell(&String::from_utf8_lossy(field)))
            .collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        records.push(row);
    }
    Ok(records)
}

/// Detects the USDA release layout: every record carries a row-type marker
/// in its second column and at least one record is a data row.
pub fn detect_layout(records: &[Vec<String>]) -> CsvLayout {
    let all_marked = !records.is_empty()
        && records.iter().all(|record| {
            record
                .get(MARKER_COLUMN)
                .is_some_and(|cell| usda::MARKERS.contains(&cell.as_str()))
        });
    let has_data = records
        .iter()
        .any(|record| usda::marker(record) == Some(usda::DATA_MARKER));
    if all_marked && has_data {
        CsvLayout::Usda
    } else {
        CsvLayout::Flat
    }
}

/// Builds a raw table from a flat file: first record is the header row.
///
/// Short records are padded with empty cells. Cells past the header row get
/// positional `Column_<n>` headers so their values reach the mapper.
pub fn flat_table(source: &str, records: &[Vec<String>]) -> RawTable {
    let Some((header, data)) = records.split_first() else {
        return RawTable::new(source, Vec::new(), Vec::new());
    };
    let mut headers: Vec<String> = header
        .iter()
        .map(|value| collapse_whitespace(value, " "))
        .collect();
    let width = data.iter().map(Vec::len).max().unwrap_or(0);
    if width > headers.len() {
        let first_long = data
            .iter()
            .position(|record| record.len() > headers.len())
            .map_or(0, |idx| idx + 2);
        warn!(
            source,
            line = first_long,
            header_width = headers.len(),
            width,
            "rows are wider than the header; extra cells get positional headers"
        );
        for idx in headers.len()..width {
            headers.push(format!("Column_{}", idx + 1));
        }
    }
    let rows = data
        .iter()
        .map(|record| {
            (0..headers.len())
                .map(|idx| record.get(idx).cloned().unwrap_or_default())
                .collect()
        })
        .collect();
    RawTable::new(source, headers, rows)
}

/// Reads one input file into a raw table.
///
/// Returns `None` for empty files and for USDA tables that are skipped.
pub fn read_raw_table(path: &Path) -> Result<Option<RawTable>> {
    let source = path.display().to_string();
    let records = read_csv_records(path)?;
    if records.is_empty() {
        warn!(source = %source, "skipping empty file");
        return Ok(None);
    }
    match detect_layout(&records) {
        CsvLayout::Flat => Ok(Some(flat_table(&source, &records))),
        CsvLayout::Usda => match usda::usda_table(&source, &records) {
            Ok(table) => Ok(Some(table)),
            Err(reason) => {
                info!(source = %source, reason = %reason, "skipping USDA table");
                Ok(None)
            }
        },
    }
}
