#![deny(unsafe_code)]

//! Value normalization, typed table building and merging.

pub mod merge;
pub mod normalize;
pub mod table;

pub use merge::{MergeOutcome, merge};
pub use normalize::{ParseError, SpecialToken, normalize};
pub use table::{BuildOutcome, build_table, clean_state_name};
