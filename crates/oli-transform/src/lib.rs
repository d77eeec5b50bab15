//! Value canonicalization for imported label rows.
//!
//! - **normalization**: boolean and chain token resolution
//! - **canonicalize**: per-field dispatch producing conversion records

pub mod canonicalize;
pub mod normalization;

pub use canonicalize::{canonicalize, canonicalize_cell};
pub use normalization::boolean::{is_canonical_boolean, resolve_boolean};
pub use normalization::chain::resolve_chain;
