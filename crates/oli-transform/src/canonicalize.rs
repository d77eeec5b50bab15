//! Field-level canonicalization.

use oli_model::{ConversionRecord, FieldKind, ReferenceDataset, SchemaField, Vocabulary};
use tracing::trace;

use crate::normalization::boolean::resolve_boolean;
use crate::normalization::chain::resolve_chain;

/// Rewrites `raw` into the canonical form for `field`.
///
/// Booleans become `"true"`/`"false"` when recognized and are otherwise left
/// alone. Chains become a known CAIP-2 id or `""`. Everything else, including
/// categories and projects, passes through unchanged.
///
/// The returned record has `row_index` 0; the caller attaches the real index.
/// A record is produced only when a non-empty input changed.
pub fn canonicalize(
    field: &SchemaField,
    raw: &str,
    reference: &ReferenceDataset,
) -> (String, Option<ConversionRecord>) {
    let value = match field.kind {
        FieldKind::Boolean => resolve_boolean(raw).map_or_else(|| raw.to_string(), String::from),
        FieldKind::Enum(Vocabulary::Chain) => resolve_chain(raw, reference).unwrap_or_default(),
        FieldKind::Text
        | FieldKind::AddressLike
        | FieldKind::Enum(Vocabulary::Category | Vocabulary::Project) => raw.to_string(),
    };

    let record = (!raw.is_empty() && value != raw).then(|| {
        trace!(field = field.id, original = raw, converted = %value, "Canonicalized value");
        ConversionRecord {
            row_index: 0,
            field_id: field.id.to_string(),
            original_value: raw.to_string(),
            converted_value: value.clone(),
        }
    });
    (value, record)
}

/// [`canonicalize`] with the record attached to `row_index`.
pub fn canonicalize_cell(
    row_index: usize,
    field: &SchemaField,
    raw: &str,
    reference: &ReferenceDataset,
) -> (String, Option<ConversionRecord>) {
    let (value, record) = canonicalize(field, raw, reference);
    let record = record.map(|record| ConversionRecord {
        row_index,
        ..record
    });
    (value, record)
}
