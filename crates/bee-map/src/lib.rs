#![deny(unsafe_code)]

//! Column mapping: raw USDA headers to canonical column names.

pub mod mapper;
pub mod utils;

pub use bee_model::schema::underscore_normalize;
pub use mapper::{ColumnMapper, ColumnMapping, ColumnMappingEntry, ColumnTarget, map_columns};
pub use utils::closest_alias;
