//! Run-aborting pipeline errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// No raw tables were supplied.
    #[error("no input tables to process")]
    EmptyInput,

    /// Processing produced no usable rows.
    #[error("merged table has no rows: {reason}")]
    Structural { reason: String },
}
