use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::diagnostic::{ConversionRecord, Diagnostic, FieldIssue};
use crate::schema::SchemaField;

/// One imported row: field id -> canonical string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowData {
    pub cells: BTreeMap<String, String>,
}

impl RowData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.cells.get(field_id).map(String::as_str)
    }

    /// Value for `field_id`, empty when absent.
    pub fn value(&self, field_id: &str) -> &str {
        self.get(field_id).unwrap_or_default()
    }

    pub fn insert(&mut self, field_id: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(field_id.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Mapping of a single header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Header text as it appeared in the file.
    pub header: String,
    /// Matched schema field, if any.
    pub field_id: Option<String>,
    /// Edit distance of the winning match.
    pub distance: Option<usize>,
}

/// Header text -> field id, in file column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderMapping {
    pub columns: Vec<ColumnMapping>,
}

impl HeaderMapping {
    /// Field mapped at column `index`.
    pub fn field_at(&self, index: usize) -> Option<&str> {
        self.columns
            .get(index)
            .and_then(|column| column.field_id.as_deref())
    }

    /// Field mapped for a header text.
    pub fn field_for(&self, header: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.header == header)
            .and_then(|column| column.field_id.as_deref())
    }

    pub fn is_mapped(&self, field_id: &str) -> bool {
        self.columns
            .iter()
            .any(|column| column.field_id.as_deref() == Some(field_id))
    }

    pub fn unmapped_headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.field_id.is_none())
            .map(|column| column.header.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Result of one CSV import.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseResult {
    pub rows: Vec<RowData>,
    /// Schema fields with a matching header, in file column order.
    pub mapped_columns: Vec<SchemaField>,
    pub diagnostics: Vec<Diagnostic>,
    pub conversions: Vec<ConversionRecord>,
}

impl ParseResult {
    /// A result carrying only fatal diagnostics.
    pub fn aborted(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            ..Self::default()
        }
    }

    pub fn has_fatal_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fatal)
    }

    pub fn fatal_errors(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.is_fatal())
            .map(Diagnostic::message)
            .collect()
    }

    pub fn field_issues(&self) -> impl Iterator<Item = &FieldIssue> {
        self.diagnostics.iter().filter_map(Diagnostic::as_field_issue)
    }

    /// Field issues grouped by `"{row_index}-{field_id}"`.
    pub fn cell_issues(&self) -> BTreeMap<String, Vec<&FieldIssue>> {
        let mut keyed: BTreeMap<String, Vec<&FieldIssue>> = BTreeMap::new();
        for issue in self.field_issues() {
            keyed.entry(issue.cell_key()).or_default().push(issue);
        }
        keyed
    }

    pub fn blocking_count(&self) -> usize {
        self.field_issues().filter(|issue| issue.is_blocking()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| !diagnostic.is_blocking())
            .count()
    }

    /// No fatal error and no blocking field issue.
    pub fn is_submittable(&self) -> bool {
        !self.rows.is_empty() && !self.diagnostics.iter().any(Diagnostic::is_blocking)
    }

    pub fn mapped_field_ids(&self) -> Vec<&'static str> {
        self.mapped_columns.iter().map(|field| field.id).collect()
    }
}
