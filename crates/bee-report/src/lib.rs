//! Output generation for the colony dataset.
//!
//! - **Dataset**: one record per `(state, period)` as JSON (`null` for
//!   missing) and CSV (empty cell for missing)
//! - **Validation report**: every finding of the run as JSON
//! - **Summary**: row/column counts, period range, states, finding counts
//! - **Column mappings**: raw header to output column per input file

mod dataset;
mod outputs;

pub use dataset::{DatasetRecord, dataset_records, write_dataset_csv, write_dataset_json};
pub use outputs::{
    DATASET_CSV, DATASET_JSON, MAPPINGS_JSON, OutputFormat, OutputOptions, OutputPaths,
    REPORT_JSON, SUMMARY_JSON, write_json, write_outputs,
};
