//! Cell validation entry point.

use oli_model::{
    ConversionRecord, Diagnostic, FieldIssue, FieldKind, ReferenceDataset, SchemaField, Vocabulary,
};
use oli_transform::is_canonical_boolean;
use tracing::trace;

use crate::address::{AddressValidator, HexAddressValidator};
use crate::checks::duplicates::check_duplicates;
use crate::checks::vocabulary::{check_category, check_chain, check_project};

/// Validates canonical cell values against reference data.
pub struct Validator<'a> {
    reference: &'a ReferenceDataset,
    addresses: &'a dyn AddressValidator,
}

impl<'a> Validator<'a> {
    pub fn new(reference: &'a ReferenceDataset, addresses: &'a dyn AddressValidator) -> Self {
        Self {
            reference,
            addresses,
        }
    }

    pub fn reference(&self) -> &'a ReferenceDataset {
        self.reference
    }

    /// Validates one cell.
    ///
    /// Checks run in order and stop at the first blocking failure: required,
    /// format, boolean, vocabulary. The duplicate check only runs on values
    /// that passed everything else.
    pub fn validate(&self, field: &SchemaField, row_index: usize, value: &str) -> Vec<Diagnostic> {
        self.validate_cell(field, row_index, value, None)
    }

    /// Like [`Validator::validate`], with the conversion that produced `value`.
    ///
    /// When canonicalization erased an unrecognized value, the required error
    /// names the original text.
    pub fn validate_cell(
        &self,
        field: &SchemaField,
        row_index: usize,
        value: &str,
        conversion: Option<&ConversionRecord>,
    ) -> Vec<Diagnostic> {
        let issue = self.check(field, row_index, value, conversion);
        if let Some(issue) = &issue {
            trace!(
                row_index,
                field = field.id,
                blocking = issue.is_blocking(),
                message = %issue.message,
                "Field issue"
            );
        }
        issue.into_iter().map(Diagnostic::from).collect()
    }

    fn check(
        &self,
        field: &SchemaField,
        row_index: usize,
        value: &str,
        conversion: Option<&ConversionRecord>,
    ) -> Option<FieldIssue> {
        if value.is_empty() {
            return blank_issue(field, row_index, conversion);
        }

        let format_error = match field.kind {
            FieldKind::AddressLike => self.addresses.check(value),
            _ => field.check_format(value),
        };
        if let Some(message) = format_error {
            return Some(FieldIssue::error(
                row_index,
                field.id,
                format!("{}: {message}", field.label),
            ));
        }

        match field.kind {
            FieldKind::Boolean if !is_canonical_boolean(value) => Some(FieldIssue::error(
                row_index,
                field.id,
                format!("{} must be true or false (got '{value}')", field.label),
            )),
            FieldKind::Enum(Vocabulary::Chain) => {
                check_chain(row_index, field.id, value, self.reference)
            }
            FieldKind::Enum(Vocabulary::Category) => {
                check_category(row_index, field.id, value, self.reference)
            }
            FieldKind::Enum(Vocabulary::Project) => {
                check_project(row_index, field.id, value, self.reference)
            }
            _ => check_duplicates(row_index, field, value, self.reference),
        }
    }
}

fn blank_issue(
    field: &SchemaField,
    row_index: usize,
    conversion: Option<&ConversionRecord>,
) -> Option<FieldIssue> {
    let erased = conversion
        .filter(|record| record.is_blanking())
        .map(|record| record.original_value.as_str());
    match (field.required, erased) {
        (true, Some(original)) => Some(FieldIssue::error(
            row_index,
            field.id,
            format!("{} is required; '{original}' was not recognized", field.label),
        )),
        (true, None) => Some(FieldIssue::error(
            row_index,
            field.id,
            format!("{} is required", field.label),
        )),
        (false, Some(original)) => Some(FieldIssue::warning(
            row_index,
            field.id,
            format!("'{original}' was not recognized and has been cleared"),
        )),
        (false, None) => None,
    }
}

/// Validates one cell with the shape-only address check.
pub fn validate(
    field: &SchemaField,
    row_index: usize,
    value: &str,
    reference: &ReferenceDataset,
) -> Vec<Diagnostic> {
    Validator::new(reference, &HexAddressValidator).validate(field, row_index, value)
}
