//! Cell validation and correction suggestions.
//!
//! - **similarity**: pure scoring functions (edit distance, containment,
//!   hostnames, token overlap)
//! - **checks**: vocabulary and possible-duplicate checks
//! - **validator**: ordered per-cell validation producing diagnostics

#![deny(unsafe_code)]

pub mod address;
pub mod checks;
pub mod similarity;
pub mod validator;

pub use address::{AddressValidator, HexAddressValidator};
pub use checks::duplicates::similar_projects;
pub use checks::vocabulary::{category_suggestions, project_suggestions};
pub use validator::{Validator, validate};
