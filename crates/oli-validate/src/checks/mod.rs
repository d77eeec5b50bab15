//! Per-field checks run by the validator.

pub mod duplicates;
pub mod vocabulary;
