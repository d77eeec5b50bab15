//! Per-kind value normalization.

pub mod boolean;
pub mod chain;
