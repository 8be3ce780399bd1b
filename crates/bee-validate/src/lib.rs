#![deny(unsafe_code)]

//! Validation of merged colony tables.
//!
//! Every check reports findings instead of failing, so one bad row never
//! hides problems elsewhere in the table. Checks are independent of each
//! other; only the schema check alters the table, by adding missing required
//! columns as all-missing.

pub mod checks;
pub mod validator;

pub use validator::{Validator, validate};
