//! TOML configuration file.
//!
//! ```toml
//! staleness_threshold_years = 3
//! stressor_sum_ceiling = 175.0
//! required_columns = ["Starting_Colonies", "Lost_colonies"]
//!
//! [column_aliases]
//! "Colonies at start" = "Starting_Colonies"
//! ```
//!
//! Aliases extend the built-in alias table; every other key replaces the
//! default value.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use bee_model::PipelineOptions;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub staleness_threshold_years: Option<u32>,
    pub stressor_sum_ceiling: Option<f64>,
    pub column_aliases: BTreeMap<String, String>,
    pub excluded_columns: Option<Vec<String>>,
    pub required_columns: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("load config {}", path.display()))
    }

    /// Applies the file on top of the default options.
    pub fn into_options(self) -> PipelineOptions {
        let mut options = PipelineOptions::default().with_aliases(self.column_aliases);
        if let Some(years) = self.staleness_threshold_years {
            options = options.with_staleness_threshold_years(years);
        }
        if let Some(ceiling) = self.stressor_sum_ceiling {
            options = options.with_stressor_sum_ceiling(ceiling);
        }
        if let Some(columns) = self.excluded_columns {
            options = options.with_excluded_columns(columns);
        }
        if let Some(columns) = self.required_columns {
            options = options.with_required_columns(columns);
        }
        options
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub staleness_threshold_years: Option<u32>,
    pub stressor_sum_ceiling: Option<f64>,
    pub required_columns: Vec<String>,
}

/// Builds run options: defaults, then the config file, then CLI flags.
pub fn resolve_options(
    config: Option<&Path>,
    overrides: &OptionOverrides,
) -> Result<PipelineOptions> {
    let file = match config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let mut options = file.into_options();
    if let Some(years) = overrides.staleness_threshold_years {
        options = options.with_staleness_threshold_years(years);
    }
    if let Some(ceiling) = overrides.stressor_sum_ceiling {
        options = options.with_stressor_sum_ceiling(ceiling);
    }
    if !overrides.required_columns.is_empty() {
        options = options.with_required_columns(overrides.required_columns.clone());
    }
    Ok(options)
}
