//! Findings reported by the mapping, merge and validation stages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::RowKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    UnmappedColumn,
    DuplicateColumn,
    UnparseableValue,
    MissingKey,
    MergeOverwrite,
    RequiredColumnMissing,
    OutOfRange,
    Inconsistent,
    Stale,
    StressorSum,
    UnknownState,
    EmptyColumn,
}

impl FindingCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::UnmappedColumn => "Unmapped Column",
            Self::DuplicateColumn => "Duplicate Column",
            Self::UnparseableValue => "Unparseable Value",
            Self::MissingKey => "Missing Key",
            Self::MergeOverwrite => "Merge Overwrite",
            Self::RequiredColumnMissing => "Required Column Missing",
            Self::OutOfRange => "Out Of Range",
            Self::Inconsistent => "Inconsistent Values",
            Self::Stale => "Stale Data",
            Self::StressorSum => "Stressor Sum",
            Self::UnknownState => "Unknown State",
            Self::EmptyColumn => "Empty Column",
        }
    }
}

/// Where a finding applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum FindingLocation {
    Table,
    Column {
        column: String,
    },
    Row {
        state: String,
        period: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        column: Option<String>,
    },
}

impl FindingLocation {
    pub fn column(column: impl Into<String>) -> Self {
        Self::Column {
            column: column.into(),
        }
    }

    pub fn row(key: &RowKey) -> Self {
        Self::Row {
            state: key.state.clone(),
            period: key.period.label(),
            column: None,
        }
    }

    pub fn cell(key: &RowKey, column: impl Into<String>) -> Self {
        Self::Row {
            state: key.state.clone(),
            period: key.period.label(),
            column: Some(column.into()),
        }
    }

    /// Column the finding refers to, if any.
    pub fn column_name(&self) -> Option<&str> {
        match self {
            Self::Table => None,
            Self::Column { column } => Some(column),
            Self::Row { column, .. } => column.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub category: FindingCategory,
    pub location: FindingLocation,
    pub message: String,
    /// Raw table the finding came from, when it predates the merge.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
}

impl Finding {
    pub fn error(
        category: FindingCategory,
        location: FindingLocation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            category,
            location,
            message: message.into(),
            source: None,
        }
    }

    pub fn warning(
        category: FindingCategory,
        location: FindingLocation,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            location,
            message: message.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Findings collected during one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        self.findings.extend(findings);
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    pub fn by_category(&self) -> BTreeMap<FindingCategory, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.category).or_insert(0) += 1;
        }
        counts
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.severity == severity)
            .count()
    }
}

impl FromIterator<Finding> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        Self {
            findings: iter.into_iter().collect(),
        }
    }
}
