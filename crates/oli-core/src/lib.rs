//! Label CSV import pipeline.
//!
//! Ties the ingest, mapping, canonicalization and validation crates together
//! and produces a [`ParseResult`](oli_model::ParseResult).

pub mod import;
pub mod pipeline;
pub mod report;

pub use import::{clean_csv, import_file, write_clean_csv};
pub use pipeline::{ImportPipeline, parse_csv, parse_csv_with};
pub use report::{ImportReport, ImportSummary, REPORT_SCHEMA, REPORT_SCHEMA_VERSION};
