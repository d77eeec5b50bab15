//! Header mapping: reconciles user-supplied CSV headers with a schema.

pub mod engine;
pub mod error;
pub mod utils;

pub use engine::{Candidate, HeaderMapper, MappingResult, map_headers};
pub use error::MappingError;
pub use utils::{distance_threshold, normalize_header};
