//! Header canonicalization.
//!
//! Rules are applied in order: underscore normalization, alias lookup, then
//! the exclusion list. Headers that survive without an alias are kept under
//! their normalized name and reported, so no source column disappears
//! without a finding.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use bee_model::schema::{alias_key, underscore_normalize};
use bee_model::{ColumnName, Finding, FindingCategory, FindingLocation, PipelineOptions};

use crate::utils::closest_alias;

/// Outcome for a single raw header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "column", rename_all = "snake_case")]
pub enum ColumnTarget {
    /// Header matched the alias table.
    Canonical(ColumnName),
    /// Header kept under its normalized name.
    Unmapped(ColumnName),
    /// Header is on the exclusion list or blank.
    Excluded,
    /// Header resolved to a name an earlier header already took.
    Duplicate(ColumnName),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMappingEntry {
    pub raw: String,
    pub target: ColumnTarget,
}

impl ColumnMappingEntry {
    /// Output column for this header, if its values are kept.
    pub fn output(&self) -> Option<&ColumnName> {
        match &self.target {
            ColumnTarget::Canonical(name) | ColumnTarget::Unmapped(name) => Some(name),
            ColumnTarget::Excluded | ColumnTarget::Duplicate(_) => None,
        }
    }
}

/// Mapping for one raw header set, positionally aligned with the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnMapping {
    entries: Vec<ColumnMappingEntry>,
    #[serde(skip)]
    findings: Vec<Finding>,
}

impl ColumnMapping {
    pub fn entries(&self) -> &[ColumnMappingEntry] {
        &self.entries
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }

    /// Output column for the first header spelled exactly `raw`.
    pub fn get(&self, raw: &str) -> Option<&ColumnName> {
        self.entries
            .iter()
            .find(|entry| entry.raw == raw)
            .and_then(ColumnMappingEntry::output)
    }

    /// Output column for the header at `index`.
    pub fn target_at(&self, index: usize) -> Option<&ColumnName> {
        self.entries.get(index).and_then(ColumnMappingEntry::output)
    }

    /// Kept output columns in header order.
    pub fn output_columns(&self) -> Vec<&ColumnName> {
        self.entries
            .iter()
            .filter_map(ColumnMappingEntry::output)
            .collect()
    }

    /// Raw header to output column, for kept headers.
    pub fn as_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter_map(|entry| {
                entry
                    .output()
                    .map(|name| (entry.raw.clone(), name.as_str().to_string()))
            })
            .collect()
    }
}

/// Maps raw headers using an alias table and exclusion list.
pub struct ColumnMapper<'a> {
    aliases: &'a BTreeMap<String, String>,
    excluded: BTreeSet<String>,
}

impl<'a> ColumnMapper<'a> {
    pub fn new(options: &'a PipelineOptions) -> Self {
        Self {
            aliases: &options.column_aliases,
            excluded: options
                .excluded_columns
                .iter()
                .map(|name| alias_key(&underscore_normalize(name)))
                .collect(),
        }
    }

    pub fn map_columns<S: AsRef<str>>(&self, headers: &[S]) -> ColumnMapping {
        let mut mapping = ColumnMapping::default();
        let mut taken: BTreeSet<ColumnName> = BTreeSet::new();

        for header in headers {
            let raw = header.as_ref();
            let normalized = underscore_normalize(raw);
            let target = self.resolve(raw, &normalized, &mut mapping.findings);
            let target = match target {
                ColumnTarget::Canonical(name) | ColumnTarget::Unmapped(name)
                    if taken.contains(&name) =>
                {
                    mapping.findings.push(Finding::warning(
                        FindingCategory::DuplicateColumn,
                        FindingLocation::column(name.as_str()),
                        format!(
                            "column {raw:?} duplicates {name}; keeping the first occurrence"
                        ),
                    ));
                    ColumnTarget::Duplicate(name)
                }
                other => other,
            };
            if let ColumnTarget::Canonical(name) | ColumnTarget::Unmapped(name) = &target {
                taken.insert(name.clone());
            }
            mapping.entries.push(ColumnMappingEntry {
                raw: raw.to_string(),
                target,
            });
        }

        mapping
    }

    fn resolve(&self, raw: &str, normalized: &str, findings: &mut Vec<Finding>) -> ColumnTarget {
        let Ok(name) = ColumnName::new(normalized) else {
            findings.push(Finding::warning(
                FindingCategory::UnmappedColumn,
                FindingLocation::Table,
                "blank column header dropped",
            ));
            return ColumnTarget::Excluded;
        };
        let key = alias_key(normalized);
        if let Some(canonical) = self.aliases.get(&key) {
            match ColumnName::new(canonical.as_str()) {
                Ok(canonical) => return ColumnTarget::Canonical(canonical),
                Err(_) => debug!(raw, "ignoring blank alias target"),
            }
        }
        if self.excluded.contains(&key) {
            debug!(raw, "excluded column");
            return ColumnTarget::Excluded;
        }
        let message = match closest_alias(&key, self.aliases) {
            Some(suggestion) => {
                format!("unmapped column retained as {name} (closest canonical: {suggestion})")
            }
            None => format!("unmapped column retained as {name}"),
        };
        findings.push(Finding::warning(
            FindingCategory::UnmappedColumn,
            FindingLocation::column(name.as_str()),
            message,
        ));
        ColumnTarget::Unmapped(name)
    }
}

/// Maps `headers` with the alias table and exclusions in `options`.
pub fn map_columns<S: AsRef<str>>(headers: &[S], options: &PipelineOptions) -> ColumnMapping {
    ColumnMapper::new(options).map_columns(headers)
}
