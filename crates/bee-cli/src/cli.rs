//! CLI argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bee-pipeline",
    version,
    about = "Normalize and validate USDA honey bee colony data",
    long_about = "Normalize USDA honey bee colony releases into one dataset.\n\n\
                  Maps header variants to canonical columns, resolves USDA special\n\
                  notation, merges tables by state and period, and validates the result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process a folder of USDA CSV files into a validated dataset.
    Run(RunArgs),

    /// Show how column headers map to canonical columns.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Folder searched recursively for CSV files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory for generated files (default: `processed` next to INPUT_DIR).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Dataset format to write.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: OutputFormatArg,

    /// Years after which the latest period is reported as stale.
    #[arg(long = "staleness-years", value_name = "YEARS")]
    pub staleness_years: Option<u32>,

    /// Ceiling for the per-row sum of stressor percentages.
    #[arg(long = "stressor-ceiling", value_name = "PERCENT")]
    pub stressor_ceiling: Option<f64>,

    /// Required column (repeatable; replaces the default set).
    #[arg(long = "require", value_name = "COLUMN")]
    pub required_columns: Vec<String>,

    /// Measure staleness against this date instead of today (YYYY-MM-DD).
    #[arg(long = "reference-date", value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// Write the dataset even if validation errors are found.
    ///
    /// By default only the validation report and summary are written when
    /// the report contains errors.
    #[arg(long = "allow-errors")]
    pub allow_errors: bool,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Raw column headers to map.
    #[arg(value_name = "HEADER", required = true)]
    pub headers: Vec<String>,

    /// TOML configuration file with alias overrides.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Csv,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
