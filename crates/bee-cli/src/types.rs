use std::path::PathBuf;

use bee_core::DatasetSummary;
use bee_model::ValidationReport;
use bee_report::OutputPaths;

#[derive(Debug)]
pub struct RunResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub table_count: usize,
    pub summary: DatasetSummary,
    pub report: ValidationReport,
    /// `None` on a dry run.
    pub outputs: Option<OutputPaths>,
    pub has_errors: bool,
}
