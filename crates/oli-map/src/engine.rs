//! Header mapping engine.

use std::collections::BTreeMap;

use oli_model::{ColumnMapping, Diagnostic, HeaderMapping, SchemaField};
use rapidfuzz::distance::levenshtein;
use tracing::debug;

use crate::error::MappingError;
use crate::utils::{distance_threshold, normalize_header};

/// Best schema match for one header, before thresholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub field: &'a SchemaField,
    pub distance: usize,
}

/// Outcome of mapping one header row.
#[derive(Debug, Clone, Default)]
pub struct MappingResult {
    pub mapping: HeaderMapping,
    pub diagnostics: Vec<Diagnostic>,
}

impl MappingResult {
    pub fn has_fatal_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fatal)
    }
}

struct Target<'a> {
    field: &'a SchemaField,
    id: String,
    label: String,
}

/// Maps free-form headers onto a fixed schema by edit distance.
pub struct HeaderMapper<'a> {
    targets: Vec<Target<'a>>,
}

impl<'a> HeaderMapper<'a> {
    pub fn new(schema: &'a [SchemaField]) -> Self {
        let targets = schema
            .iter()
            .map(|field| Target {
                field,
                id: normalize_header(field.id),
                label: normalize_header(field.label),
            })
            .collect();
        Self { targets }
    }

    /// Closest field for a header regardless of threshold.
    ///
    /// Ties keep the field that comes first in schema order.
    pub fn closest(&self, header: &str) -> Option<Candidate<'a>> {
        let normalized = normalize_header(header);
        if normalized.is_empty() {
            return None;
        }
        self.targets
            .iter()
            .map(|target| Candidate {
                field: target.field,
                distance: edit_distance(&normalized, &target.id)
                    .min(edit_distance(&normalized, &target.label)),
            })
            .min_by_key(|candidate| candidate.distance)
    }

    /// Accepted field for a header, if within the distance threshold.
    pub fn resolve(&self, header: &str) -> Option<Candidate<'a>> {
        let threshold = distance_threshold(&normalize_header(header));
        self.closest(header)
            .filter(|candidate| candidate.distance <= threshold)
    }

    pub fn map(&self, headers: &[String]) -> MappingResult {
        let mut columns = Vec::with_capacity(headers.len());
        let mut diagnostics = Vec::new();
        let mut claimed: BTreeMap<&str, Vec<String>> = BTreeMap::new();

        for header in headers {
            if normalize_header(header).is_empty() {
                columns.push(unmapped(header));
                continue;
            }
            match self.resolve(header) {
                Some(candidate) => {
                    debug!(
                        header = %header,
                        field = candidate.field.id,
                        distance = candidate.distance,
                        "Mapped column"
                    );
                    claimed
                        .entry(candidate.field.id)
                        .or_default()
                        .push(header.clone());
                    columns.push(ColumnMapping {
                        header: header.clone(),
                        field_id: Some(candidate.field.id.to_string()),
                        distance: Some(candidate.distance),
                    });
                }
                None => {
                    debug!(header = %header, "Column not recognized");
                    diagnostics.push(Diagnostic::column_warning(
                        header.clone(),
                        format!("Column '{header}' not recognized, ignored"),
                    ));
                    columns.push(unmapped(header));
                }
            }
        }

        for target in &self.targets {
            if let Some(headers) = claimed.get(target.field.id)
                && headers.len() > 1
            {
                let error = MappingError::DuplicateField {
                    field: target.field.label.to_string(),
                    headers: headers.clone(),
                };
                diagnostics.push(Diagnostic::fatal(error.to_string()));
            }
        }

        let missing: Vec<String> = self
            .targets
            .iter()
            .filter(|target| target.field.required && !claimed.contains_key(target.field.id))
            .map(|target| target.field.label.to_string())
            .collect();
        if !missing.is_empty() {
            let error = MappingError::MissingRequired { labels: missing };
            diagnostics.push(Diagnostic::fatal(error.to_string()));
        }

        MappingResult {
            mapping: HeaderMapping { columns },
            diagnostics,
        }
    }
}

/// Maps `headers` onto `schema`.
///
/// Fatal diagnostics are returned for duplicate matches and missing required
/// fields; callers must not materialize rows when any are present.
pub fn map_headers(headers: &[String], schema: &[SchemaField]) -> (HeaderMapping, Vec<Diagnostic>) {
    let result = HeaderMapper::new(schema).map(headers);
    (result.mapping, result.diagnostics)
}

fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

fn unmapped(header: &str) -> ColumnMapping {
    ColumnMapping {
        header: header.to_string(),
        field_id: None,
        distance: None,
    }
}
