//! Configuration options for a pipeline run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::{
    DEFAULT_EXCLUDED_COLUMNS, DEFAULT_REQUIRED_COLUMNS, alias_key, default_aliases,
    underscore_normalize,
};

pub const DEFAULT_STALENESS_THRESHOLD_YEARS: u32 = 2;
pub const DEFAULT_STRESSOR_SUM_CEILING: f64 = 150.0;

/// Options controlling column mapping and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Maximum age, in years, of the most recent period before the dataset
    /// is reported as stale.
    pub staleness_threshold_years: u32,

    /// Upper bound for the per-row sum of stressor percentages. Stressor
    /// categories overlap, so sums slightly above 100 are expected.
    pub stressor_sum_ceiling: f64,

    /// Header alias table. Keys are lowercase, underscore-normalized raw
    /// headers; values are canonical column names.
    pub column_aliases: BTreeMap<String, String>,

    /// Headers (lowercase, underscore-normalized) dropped during mapping.
    pub excluded_columns: Vec<String>,

    /// Canonical columns that must be present after the merge.
    pub required_columns: Vec<String>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            staleness_threshold_years: DEFAULT_STALENESS_THRESHOLD_YEARS,
            stressor_sum_ceiling: DEFAULT_STRESSOR_SUM_CEILING,
            column_aliases: default_aliases(),
            excluded_columns: DEFAULT_EXCLUDED_COLUMNS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            required_columns: DEFAULT_REQUIRED_COLUMNS
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces alias entries on top of the current table.
    #[must_use]
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (variant, canonical) in aliases {
            let key = alias_key(&underscore_normalize(variant.as_ref()));
            self.column_aliases.insert(key, canonical.into());
        }
        self
    }

    #[must_use]
    pub fn with_staleness_threshold_years(mut self, years: u32) -> Self {
        self.staleness_threshold_years = years;
        self
    }

    #[must_use]
    pub fn with_stressor_sum_ceiling(mut self, ceiling: f64) -> Self {
        self.stressor_sum_ceiling = ceiling;
        self
    }

    #[must_use]
    pub fn with_required_columns(mut self, columns: Vec<String>) -> Self {
        self.required_columns = columns;
        self
    }

    #[must_use]
    pub fn with_excluded_columns(mut self, columns: Vec<String>) -> Self {
        self.excluded_columns = columns;
        self
    }
}
