use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bee_cli::config::{OptionOverrides, resolve_options};
use bee_cli::paths::default_output_dir;
use bee_core::Pipeline;
use bee_ingest::load_raw_tables_excluding;
use bee_map::{ColumnMapping, map_columns};
use bee_report::{OutputFormat, OutputOptions, write_outputs};

use crate::cli::{ColumnsArgs, OutputFormatArg, RunArgs};
use crate::types::RunResult;

pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let input_dir = args.input_dir.clone();
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&input_dir));
    let overrides = OptionOverrides {
        staleness_threshold_years: args.staleness_years,
        stressor_sum_ceiling: args.stressor_ceiling,
        required_columns: args.required_columns.clone(),
    };
    let options = resolve_options(args.config.as_deref(), &overrides)?;

    let run_span = info_span!("run", input_dir = %input_dir.display());
    let _run_guard = run_span.enter();

    let ingest_start = Instant::now();
    let raw_tables = load_raw_tables_excluding(&input_dir, Some(&output_dir))
        .with_context(|| format!("load input tables from {}", input_dir.display()))?;
    info!(
        table_count = raw_tables.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let mut pipeline = Pipeline::new(&options);
    if let Some(date) = args.reference_date {
        pipeline = pipeline.with_reference_date(date);
    }
    let output = pipeline
        .run(&raw_tables)
        .with_context(|| format!("process {}", input_dir.display()))?;

    let outputs = if args.dry_run {
        None
    } else {
        let output_options = OutputOptions {
            format: match args.format {
                OutputFormatArg::Json => OutputFormat::Json,
                OutputFormatArg::Csv => OutputFormat::Csv,
                OutputFormatArg::Both => OutputFormat::Both,
            },
            allow_errors: args.allow_errors,
        };
        Some(
            write_outputs(&output_dir, &output, output_options)
                .with_context(|| format!("write outputs to {}", output_dir.display()))?,
        )
    };

    Ok(RunResult {
        input_dir,
        output_dir,
        table_count: raw_tables.len(),
        has_errors: output.report.has_errors(),
        summary: output.summary,
        report: output.report,
        outputs,
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<ColumnMapping> {
    let options = resolve_options(args.config.as_deref(), &OptionOverrides::default())?;
    Ok(map_columns(&args.headers, &options))
}
