//! Individual validation checks.

pub mod columns;
pub mod consistency;
pub mod range;
pub mod recency;
pub mod schema;
pub mod states;
pub mod stressor;
