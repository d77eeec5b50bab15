//! Diagnostics produced while importing a CSV file.
//!
//! Diagnostics are plain data. Only [`Diagnostic::FatalError`] stops a parse;
//! everything else is collected across every row so the caller can show the
//! complete picture at once.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks submission until resolved.
    Error,
    /// Informational, offers a fix but does not block.
    Warning,
}

/// A single cell-level finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub row_index: usize,
    pub field_id: String,
    pub severity: Severity,
    pub message: String,
    /// Candidate values offered as one-click corrections, best first.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// The single suggestion is a known alias of the canonical value.
    #[serde(default)]
    pub is_conversion: bool,
    /// The user should register a new entry instead of picking a suggestion.
    #[serde(default)]
    pub offers_add_new: bool,
}

impl FieldIssue {
    pub fn error(row_index: usize, field_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            row_index,
            field_id: field_id.into(),
            severity: Severity::Error,
            message: message.into(),
            suggestions: Vec::new(),
            is_conversion: false,
            offers_add_new: false,
        }
    }

    pub fn warning(
        row_index: usize,
        field_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(row_index, field_id, message)
        }
    }

    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    #[must_use]
    pub fn as_conversion(mut self) -> Self {
        self.is_conversion = true;
        self
    }

    #[must_use]
    pub fn offering_add_new(mut self) -> Self {
        self.offers_add_new = true;
        self
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Per-cell display key: `"{row_index}-{field_id}"`.
    pub fn cell_key(&self) -> String {
        cell_key(self.row_index, &self.field_id)
    }
}

/// Builds the per-cell display key used by the UI layer.
pub fn cell_key(row_index: usize, field_id: &str) -> String {
    format!("{row_index}-{field_id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// File-level error; the parse produced no rows.
    FatalError { message: String },
    /// Row-level notice, e.g. a ragged row.
    RowWarning { row_index: usize, message: String },
    /// Header-level notice, e.g. an unrecognized column.
    ColumnWarning { header: String, message: String },
    FieldIssue(FieldIssue),
}

impl Diagnostic {
    pub fn fatal(message: impl Into<String>) -> Self {
        Diagnostic::FatalError {
            message: message.into(),
        }
    }

    pub fn row_warning(row_index: usize, message: impl Into<String>) -> Self {
        Diagnostic::RowWarning {
            row_index,
            message: message.into(),
        }
    }

    pub fn column_warning(header: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic::ColumnWarning {
            header: header.into(),
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Diagnostic::FatalError { .. })
    }

    /// Fatal errors and blocking field issues.
    pub fn is_blocking(&self) -> bool {
        match self {
            Diagnostic::FatalError { .. } => true,
            Diagnostic::FieldIssue(issue) => issue.is_blocking(),
            Diagnostic::RowWarning { .. } | Diagnostic::ColumnWarning { .. } => false,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Diagnostic::FatalError { message }
            | Diagnostic::RowWarning { message, .. }
            | Diagnostic::ColumnWarning { message, .. } => message,
            Diagnostic::FieldIssue(issue) => &issue.message,
        }
    }

    pub fn as_field_issue(&self) -> Option<&FieldIssue> {
        match self {
            Diagnostic::FieldIssue(issue) => Some(issue),
            _ => None,
        }
    }

    /// Per-cell key for field issues, `None` for file-level diagnostics.
    pub fn cell_key(&self) -> Option<String> {
        self.as_field_issue().map(FieldIssue::cell_key)
    }
}

impl From<FieldIssue> for Diagnostic {
    fn from(issue: FieldIssue) -> Self {
        Diagnostic::FieldIssue(issue)
    }
}

/// Audit entry for a value that parsing rewrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub row_index: usize,
    pub field_id: String,
    pub original_value: String,
    pub converted_value: String,
}

impl ConversionRecord {
    /// True when the conversion erased a value it could not recognize.
    pub fn is_blanking(&self) -> bool {
        self.converted_value.is_empty() && !self.original_value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_issue_is_not_blocking() {
        let issue = FieldIssue::warning(3, "usage_category", "Did you mean 'dex'?")
            .with_suggestions(vec!["dex".to_string()])
            .as_conversion();
        assert!(!issue.is_blocking());
        assert_eq!(issue.cell_key(), "3-usage_category");
        let diagnostic = Diagnostic::from(issue);
        assert!(!diagnostic.is_blocking());
        assert_eq!(diagnostic.cell_key().as_deref(), Some("3-usage_category"));
    }

    #[test]
    fn fatal_is_blocking_and_unkeyed() {
        let diagnostic = Diagnostic::fatal("CSV must contain a header and at least one data row");
        assert!(diagnostic.is_fatal());
        assert!(diagnostic.is_blocking());
        assert!(diagnostic.cell_key().is_none());
    }

    #[test]
    fn blanking_conversion_detected() {
        let record = ConversionRecord {
            row_index: 0,
            field_id: "chain_id".to_string(),
            original_value: "eip155:999999".to_string(),
            converted_value: String::new(),
        };
        assert!(record.is_blanking());
    }
}
