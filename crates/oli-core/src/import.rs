//! File-level helpers around the pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use oli_ingest::{load_csv_text, write_rows};
use oli_model::ParseResult;

use crate::pipeline::ImportPipeline;

/// Reads and parses a CSV file.
pub fn import_file(path: &Path, pipeline: &ImportPipeline<'_>) -> Result<ParseResult> {
    let text =
        load_csv_text(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(pipeline.parse(&text))
}

/// Serializes canonical rows back to CSV, one column per mapped field.
pub fn clean_csv(result: &ParseResult) -> Result<String> {
    let columns = result.mapped_field_ids();
    write_rows(&columns, &result.rows).context("Failed to serialize rows")
}

/// Writes the canonical rows to `path`.
pub fn write_clean_csv(path: &Path, result: &ParseResult) -> Result<()> {
    let csv = clean_csv(result)?;
    std::fs::write(path, csv).with_context(|| format!("Failed to write {}", path.display()))
}
