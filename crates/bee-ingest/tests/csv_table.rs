//! Tests for CSV reading and the USDA release layout.

use std::fs;
use std::path::PathBuf;

use bee_ingest::{
    CsvLayout, SkipReason, UsdaTableKind, detect_layout, flat_table, read_csv_records,
    read_raw_table, usda_table,
};
use tempfile::TempDir;

fn write_bytes(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn record(cells: &[&str]) -> Vec<String> {
    cells.iter().map(ToString::to_string).collect()
}

fn states(count: usize) -> Vec<String> {
    (0..count).map(|idx| format!("State {idx}")).collect()
}

/// USDA colony table with `data_rows` state rows plus a notes row.
fn colony_release(data_rows: usize) -> Vec<Vec<String>> {
    let mut records = vec![
        record(&[
            "1",
            "t",
            "Colonies, Maximum, Lost, Percent Lost, Added, Renovated: January 1-March 31, 2023 and 2022",
        ]),
        record(&["1", "h", "", "", "Maximum", "Lost", "Percent", "Added", "Renovated", "Percent"]),
        record(&["1", "h", "State", "January 1", "colonies", "colonies", "lost", "colonies", "colonies", "renovated"]),
        record(&["1", "u", "", "(number)", "(number)", "(number)", "(percent)", "(number)", "(number)", "(percent)"]),
    ];
    for state in states(data_rows) {
        records.push(record(&[
            "1", "d", &state, "7,000", "7,000", "1,800", "26", "(Z)", "250", "4", "",
        ]));
    }
    records.push(record(&["1", "d", "Footnote row", "", ""]));
    records.push(record(&["1", "f", "(Z) Less than half unit. Revised 2019."]));
    records
}

#[test]
fn reads_records_with_lossy_utf8_and_ragged_rows() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_bytes(&dir, "latin1.csv", b"State,Period\nQu\xe9bec,2023-Q1,extra\n\n");

    let records = read_csv_records(&path).expect("read");

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].len(), 3);
    assert!(records[1][0].starts_with("Qu"));
    assert!(records[1][0].contains('\u{fffd}'));
}

#[test]
fn flat_file_uses_first_row_as_header() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_bytes(
        &dir,
        "flat.csv",
        b"\xef\xbb\xbfState ,  Lost   colonies,Period\nAlabama,(Z),2023-Q1\nTexas,5\n",
    );

    let table = read_raw_table(&path).expect("read").expect("table");

    assert_eq!(table.headers, vec!["State", "Lost colonies", "Period"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[1], vec!["Texas", "5", ""]);
}

#[test]
fn cells_past_the_header_get_positional_headers() {
    let records = vec![
        record(&["State", "Period"]),
        record(&["Alabama", "2023-Q1", "42", "7"]),
        record(&["Texas", "2023-Q1"]),
    ];

    let table = flat_table("wide.csv", &records);

    assert_eq!(table.headers, vec!["State", "Period", "Column_3", "Column_4"]);
    assert_eq!(table.rows[0], vec!["Alabama", "2023-Q1", "42", "7"]);
    assert_eq!(table.rows[1], vec!["Texas", "2023-Q1", "", ""]);
}

#[test]
fn detects_usda_layout_by_markers() {
    assert_eq!(detect_layout(&colony_release(40)), CsvLayout::Usda);
    let flat = vec![record(&["State", "Period"]), record(&["Alabama", "2023-Q1"])];
    assert_eq!(detect_layout(&flat), CsvLayout::Flat);
}

#[test]
fn usda_colony_table_is_labelled_and_dated() {
    let table = usda_table("colonies.csv", &colony_release(40)).expect("table");

    assert_eq!(
        table.headers,
        vec![
            "table",
            "State",
            "Starting_Colonies",
            "Max_Colonies",
            "Lost_colonies",
            "Percent_lost",
            "Added_colonies",
            "Renovated_colonies",
            "Percent_renovated",
            "Period",
        ]
    );
    // The notes row has too few cells to be a state.
    assert_eq!(table.rows.len(), 40);
    assert_eq!(table.rows[0][1], "State 0");
    assert_eq!(table.rows[0][6], "(Z)");
    assert_eq!(table.rows[0][9], "2022-01");
}

#[test]
fn usda_table_outside_state_level_is_skipped() {
    let err = usda_table("national.csv", &colony_release(10)).unwrap_err();
    assert_eq!(err, SkipReason::NotStateLevel { data_rows: 11 });
}

#[test]
fn usda_table_without_month_is_skipped() {
    let mut records = colony_release(40);
    records[0] = record(&["1", "t", "Colonies, Maximum, Lost, Percent Lost, Added, Renovated 2023"]);
    records[2][3] = "Start".to_string();

    let err = usda_table("undated.csv", &records).unwrap_err();

    assert_eq!(err, SkipReason::Undated);
}

#[test]
fn stressor_table_uses_stressor_headers() {
    let mut records = vec![
        record(&["2", "t", "Colony Health Stressors by State"]),
        record(&["2", "t", "Percent of colonies affected: April 1-June 30, 2023"]),
        record(&[
            "2",
            "h",
            "State",
            "Varroa mites",
            "Other pests/parasites",
            "Diseases",
            "Pesticides",
            "Other",
            "Unknown",
        ]),
    ];
    for state in states(45) {
        records.push(record(&["2", "d", &state, "40", "10", "2", "8", "5", "1"]));
    }

    let table = usda_table("stressors.csv", &records).expect("table");

    assert_eq!(table.headers.len(), UsdaTableKind::Stressors.headers().len() + 1);
    assert_eq!(table.headers[2], "Varroa_mites");
    assert_eq!(table.rows[0].last().map(String::as_str), Some("2023-04"));
}

#[test]
fn skipped_usda_file_reads_as_none() {
    let dir = TempDir::new().expect("temp dir");
    let contents: String = colony_release(5)
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{cell}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    let path = write_bytes(&dir, "us.csv", contents.as_bytes());

    assert_eq!(read_raw_table(&path).expect("read"), None);
}
