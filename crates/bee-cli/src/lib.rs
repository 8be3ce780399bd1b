//! CLI library components for the colony pipeline.

pub mod config;
pub mod logging;
pub mod paths;
