//! Pipeline orchestration.
//!
//! # Stage order
//!
//! 1. **Map** - resolve each raw table's headers to canonical names
//! 2. **Build** - normalize every cell into a typed table
//! 3. **Merge** - combine typed tables by `(state, period)` in caller order
//! 4. **Validate** - schema, range and consistency checks
//!
//! Findings from every stage land in one report. Only empty input and an
//! empty merged table abort the run.

use std::time::Instant;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, info_span};

use bee_map::{ColumnMapper, ColumnMapping};
use bee_model::{PipelineOptions, RawTable, Table, ValidationReport};
use bee_transform::{build_table, merge};
use bee_validate::Validator;

use crate::error::PipelineError;
use crate::summary::DatasetSummary;

/// Column mapping applied to one input table.
#[derive(Debug, Clone, Serialize)]
pub struct SourceMapping {
    pub source: String,
    pub mapping: ColumnMapping,
}

/// Final dataset and everything reported about it.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub table: Table,
    pub report: ValidationReport,
    pub summary: DatasetSummary,
    pub mappings: Vec<SourceMapping>,
}

/// Runs raw tables through map, build, merge and validate.
pub struct Pipeline<'a> {
    options: &'a PipelineOptions,
    reference_date: Option<NaiveDate>,
}

impl<'a> Pipeline<'a> {
    pub fn new(options: &'a PipelineOptions) -> Self {
        Self {
            options,
            reference_date: None,
        }
    }

    /// Date the recency check measures against; defaults to today.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn run(&self, raw_tables: &[RawTable]) -> Result<PipelineOutput, PipelineError> {
        if raw_tables.is_empty() {
            return Err(PipelineError::EmptyInput);
        }
        let run_span = info_span!("pipeline", table_count = raw_tables.len());
        let _run_guard = run_span.enter();
        let run_start = Instant::now();
        let mut report = ValidationReport::new();

        let mapper = ColumnMapper::new(self.options);
        let mappings: Vec<SourceMapping> = info_span!("map").in_scope(|| {
            let start = Instant::now();
            let mappings: Vec<SourceMapping> = raw_tables
                .iter()
                .map(|raw| SourceMapping {
                    source: raw.source.clone(),
                    mapping: mapper.map_columns(&raw.headers),
                })
                .collect();
            debug!(
                table_count = mappings.len(),
                duration_ms = start.elapsed().as_millis(),
                "column mapping complete"
            );
            mappings
        });
        for SourceMapping { source, mapping } in &mappings {
            report.extend(
                mapping
                    .findings()
                    .iter()
                    .cloned()
                    .map(|finding| finding.with_source(source.as_str())),
            );
        }

        let tables: Vec<Table> = info_span!("build").in_scope(|| {
            let start = Instant::now();
            let mut tables = Vec::with_capacity(raw_tables.len());
            for (raw, SourceMapping { mapping, .. }) in raw_tables.iter().zip(&mappings) {
                let outcome = build_table(raw, mapping);
                report.extend(outcome.findings);
                tables.push(outcome.table);
            }
            debug!(
                row_count = tables.iter().map(Table::len).sum::<usize>(),
                duration_ms = start.elapsed().as_millis(),
                "table build complete"
            );
            tables
        });

        let merged = info_span!("merge").in_scope(|| {
            let start = Instant::now();
            let outcome = merge(&tables);
            debug!(
                row_count = outcome.table.len(),
                overwrites = outcome.findings.len(),
                duration_ms = start.elapsed().as_millis(),
                "merge complete"
            );
            report.extend(outcome.findings);
            outcome.table
        });
        if merged.is_empty() {
            return Err(PipelineError::Structural {
                reason: format!(
                    "none of the {} input table(s) produced a row with a state and period",
                    raw_tables.len()
                ),
            });
        }

        let table = info_span!("validate").in_scope(|| {
            let start = Instant::now();
            let mut validator = Validator::new(self.options);
            if let Some(date) = self.reference_date {
                validator = validator.with_reference_date(date);
            }
            let (table, findings) = validator.validate(&merged);
            debug!(
                errors = findings.error_count(),
                warnings = findings.warning_count(),
                duration_ms = start.elapsed().as_millis(),
                "validation complete"
            );
            report.extend(findings.findings);
            table
        });

        let summary = DatasetSummary::from_table(&table, &report);
        info!(
            row_count = summary.total_rows,
            column_count = summary.total_columns,
            errors = summary.errors,
            warnings = summary.warnings,
            duration_ms = run_start.elapsed().as_millis(),
            "pipeline complete"
        );
        Ok(PipelineOutput {
            table,
            report,
            summary,
            mappings,
        })
    }
}

/// Runs the pipeline with recency measured against today.
pub fn run(
    raw_tables: &[RawTable],
    options: &PipelineOptions,
) -> Result<PipelineOutput, PipelineError> {
    Pipeline::new(options).run(raw_tables)
}
