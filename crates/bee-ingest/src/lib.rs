pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod usda;

pub use csv_table::{CsvLayout, detect_layout, flat_table, read_csv_records, read_raw_table};
pub use discovery::{
    list_csv_files, list_csv_files_excluding, load_raw_tables, load_raw_tables_excluding,
};
pub use error::{IngestError, Result};
pub use usda::{SkipReason, UsdaTableKind, usda_table};
