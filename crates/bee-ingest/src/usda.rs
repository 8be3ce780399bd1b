//! USDA "Honey Bee Colonies" release tables.
//!
//! Each release CSV holds one table. Column 0 is the table number and
//! column 1 a row-type marker (`t` title, `h` header, `d` data, `f` footnote,
//! `u` unit, `c` comment). The header rows are multi-line prose, so data
//! cells are labelled positionally with fixed header names chosen by
//! classifying the table from its keywords.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use bee_model::schema::{
    ADDED_COLONIES, DISEASES, LOST_COLONIES, MAX_COLONIES, OTHER, OTHER_PESTS, PERCENT_LOST,
    PERCENT_RENOVATED, PERIOD, PESTICIDES, RENOVATED_COLONIES, STARTING_COLONIES, STATE, UNKNOWN,
    VARROA_MITES,
};
use bee_model::{Period, RawTable};

/// Index of the row-type marker.
pub const MARKER_COLUMN: usize = 1;
pub const DATA_MARKER: &str = "d";
pub const HEADER_MARKER: &str = "h";
pub const FOOTNOTE_MARKER: &str = "f";
pub const MARKERS: &[&str] = &["t", "h", "d", "f", "u", "c"];

/// Data row counts of state-level tables (states plus aggregates).
pub const MIN_DATA_ROWS: usize = 35;
pub const MAX_DATA_ROWS: usize = 70;

/// Data rows with at most this many non-empty cells are notes, not states.
const MIN_FILLED_CELLS: usize = 3;

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const STRESSOR_KEYWORDS: &[&str] = &[
    "state",
    "varroa",
    "parasites",
    "diseases",
    "pesticides",
    "other",
    "unknown",
];
const COLONY_KEYWORDS: &[&str] = &["state", "max", "lost", "percent", "added", "renovated"];

const TABLE_NUMBER: &str = "table";

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("Invalid year regex"));

/// What a USDA table reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsdaTableKind {
    Colonies,
    Stressors,
}

impl UsdaTableKind {
    /// Positional header names for the table's cells after the marker
    /// column is removed.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Colonies => &[
                TABLE_NUMBER,
                STATE,
                STARTING_COLONIES,
                MAX_COLONIES,
                LOST_COLONIES,
                PERCENT_LOST,
                ADDED_COLONIES,
                RENOVATED_COLONIES,
                PERCENT_RENOVATED,
            ],
            Self::Stressors => &[
                TABLE_NUMBER,
                STATE,
                VARROA_MITES,
                OTHER_PESTS,
                DISEASES,
                PESTICIDES,
                OTHER,
                UNKNOWN,
            ],
        }
    }
}

/// Why a USDA table was not used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("{data_rows} data rows, not a state-level table")]
    NotStateLevel { data_rows: usize },
    #[error("neither a colony count nor a stressor table")]
    Unclassified,
    #[error("no month and year found in the table headings")]
    Undated,
}

pub fn marker(record: &[String]) -> Option<&str> {
    record.get(MARKER_COLUMN).map(String::as_str)
}

fn contains_all(records: &[Vec<String>], keywords: &[&str]) -> bool {
    let cells: Vec<String> = records
        .iter()
        .flatten()
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.to_lowercase())
        .collect();
    keywords
        .iter()
        .all(|keyword| cells.iter().any(|cell| cell.contains(keyword)))
}

/// Classifies a table by keyword presence. Stressor tables also mention
/// "lost" colonies, so they are tried first.
pub fn classify(records: &[Vec<String>]) -> Option<UsdaTableKind> {
    if contains_all(records, STRESSOR_KEYWORDS) {
        Some(UsdaTableKind::Stressors)
    } else if contains_all(records, COLONY_KEYWORDS) {
        Some(UsdaTableKind::Colonies)
    } else {
        None
    }
}

fn month_in(record: &[String]) -> Option<u32> {
    record.iter().find_map(|cell| {
        MONTHS
            .iter()
            .position(|month| cell.contains(month))
            .and_then(|index| u32::try_from(index + 1).ok())
    })
}

/// First month named in a header row, falling back to the second record.
pub fn first_month(records: &[Vec<String>]) -> Option<u32> {
    records
        .iter()
        .filter(|record| marker(record) == Some(HEADER_MARKER))
        .find_map(|record| month_in(record))
        .or_else(|| records.get(1).and_then(|record| month_in(record)))
}

/// Earliest four-digit year outside data and footnote rows.
pub fn earliest_year(records: &[Vec<String>]) -> Option<i32> {
    records
        .iter()
        .filter(|record| {
            !matches!(marker(record), Some(DATA_MARKER) | Some(FOOTNOTE_MARKER))
        })
        .flatten()
        .flat_map(|cell| YEAR_REGEX.captures_iter(cell))
        .filter_map(|captures| captures.get(1)?.as_str().parse::<i32>().ok())
        .filter(|year| (1001..=9999).contains(year))
        .min()
}

/// Converts a USDA release table into a raw table with positional headers
/// and a trailing `Period` column.
pub fn usda_table(source: &str, records: &[Vec<String>]) -> Result<RawTable, SkipReason> {
    let data: Vec<&Vec<String>> = records
        .iter()
        .filter(|record| marker(record) == Some(DATA_MARKER))
        .collect();
    if !(MIN_DATA_ROWS..=MAX_DATA_ROWS).contains(&data.len()) {
        return Err(SkipReason::NotStateLevel {
            data_rows: data.len(),
        });
    }
    let kind = classify(records).ok_or(SkipReason::Unclassified)?;
    let (Some(month), Some(year)) = (first_month(records), earliest_year(records)) else {
        return Err(SkipReason::Undated);
    };
    let period = Period::month(year, month)
        .map_err(|_| SkipReason::Undated)?
        .label();

    let cells: Vec<Vec<&str>> = data
        .iter()
        .map(|record| {
            record
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != MARKER_COLUMN)
                .map(|(_, cell)| cell.as_str())
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().filter(|cell| !cell.is_empty()).count() > MIN_FILLED_CELLS)
        .collect();

    // Trailing columns empty in every row are dropped before labelling.
    let width = cells
        .iter()
        .filter_map(|row| row.iter().rposition(|cell| !cell.is_empty()))
        .map(|idx| idx + 1)
        .max()
        .unwrap_or(0);
    let names = kind.headers();
    let width = width.min(names.len());

    let mut headers: Vec<String> = names[..width].iter().map(ToString::to_string).collect();
    headers.push(PERIOD.to_string());
    let rows = cells
        .iter()
        .map(|row| {
            let mut values: Vec<String> = (0..width)
                .map(|idx| row.get(idx).map(ToString::to_string).unwrap_or_default())
                .collect();
            values.push(period.clone());
            values
        })
        .collect();
    Ok(RawTable::new(source, headers, rows))
}
