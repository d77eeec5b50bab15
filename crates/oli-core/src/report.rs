//! JSON report envelope for an import.

use anyhow::Result;
use chrono::Utc;
use oli_model::{ConversionRecord, Diagnostic, ParseResult, RowData};
use serde::Serialize;

pub const REPORT_SCHEMA: &str = "oli-import.report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub rows: usize,
    pub mapped_columns: Vec<&'static str>,
    pub fatal_errors: usize,
    pub blocking: usize,
    pub warnings: usize,
    pub conversions: usize,
    pub submittable: bool,
}

impl ImportSummary {
    pub fn from_result(result: &ParseResult) -> Self {
        Self {
            rows: result.rows.len(),
            mapped_columns: result.mapped_field_ids(),
            fatal_errors: result.fatal_errors().len(),
            blocking: result.blocking_count(),
            warnings: result.warning_count(),
            conversions: result.conversions.len(),
            submittable: result.is_submittable(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImportReport<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub label_schema: String,
    pub summary: ImportSummary,
    pub diagnostics: &'a [Diagnostic],
    pub conversions: &'a [ConversionRecord],
    pub rows: &'a [RowData],
}

impl<'a> ImportReport<'a> {
    pub fn new(
        source: impl Into<String>,
        label_schema: impl Into<String>,
        result: &'a ParseResult,
    ) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            source: source.into(),
            label_schema: label_schema.into(),
            summary: ImportSummary::from_result(result),
            diagnostics: &result.diagnostics,
            conversions: &result.conversions,
            rows: &result.rows,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
