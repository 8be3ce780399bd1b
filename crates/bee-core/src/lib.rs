#![deny(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod summary;

pub use error::PipelineError;
pub use pipeline::{Pipeline, PipelineOutput, SourceMapping, run};
pub use summary::{DatasetSummary, PeriodRange};
