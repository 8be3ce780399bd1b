use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use bee_core::PipelineOutput;

use crate::dataset::{write_dataset_csv, write_dataset_json};

pub const DATASET_JSON: &str = "bee_data.json";
pub const DATASET_CSV: &str = "bee_data.csv";
pub const REPORT_JSON: &str = "validation_report.json";
pub const SUMMARY_JSON: &str = "data_summary.json";
pub const MAPPINGS_JSON: &str = "column_mappings.json";

/// Dataset file formats to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    #[default]
    Both,
}

impl OutputFormat {
    fn json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    fn csv(self) -> bool {
        matches!(self, Self::Csv | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Write the dataset even when the report has errors.
    pub allow_errors: bool,
}

/// Files written by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPaths {
    pub dataset_json: Option<PathBuf>,
    pub dataset_csv: Option<PathBuf>,
    pub report: PathBuf,
    pub summary: PathBuf,
    pub mappings: PathBuf,
}

impl OutputPaths {
    pub fn dataset_written(&self) -> bool {
        self.dataset_json.is_some() || self.dataset_csv.is_some()
    }
}

/// Serializes `value` as pretty JSON to `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("write {}", path.display()))
}

/// Writes the run outputs into `output_dir`.
///
/// The report, summary and mappings are always written. The dataset is
/// withheld when the report has errors unless `allow_errors` is set.
pub fn write_outputs(
    output_dir: &Path,
    output: &PipelineOutput,
    options: OutputOptions,
) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;

    let mut paths = OutputPaths {
        report: output_dir.join(REPORT_JSON),
        summary: output_dir.join(SUMMARY_JSON),
        mappings: output_dir.join(MAPPINGS_JSON),
        ..OutputPaths::default()
    };
    write_json(&paths.report, &output.report.findings)?;
    write_json(&paths.summary, &output.summary)?;
    write_json(&paths.mappings, &output.mappings)?;

    if output.report.has_errors() && !options.allow_errors {
        info!(
            errors = output.report.error_count(),
            "dataset not written: validation errors present"
        );
        return Ok(paths);
    }

    if options.format.json() {
        let path = output_dir.join(DATASET_JSON);
        let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
        write_dataset_json(BufWriter::new(file), &output.table)
            .with_context(|| format!("write {}", path.display()))?;
        paths.dataset_json = Some(path);
    }
    if options.format.csv() {
        let path = output_dir.join(DATASET_CSV);
        let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
        write_dataset_csv(BufWriter::new(file), &output.table)
            .with_context(|| format!("write {}", path.display()))?;
        paths.dataset_csv = Some(path);
    }
    info!(
        output_dir = %output_dir.display(),
        rows = output.table.len(),
        "outputs written"
    );
    Ok(paths)
}
