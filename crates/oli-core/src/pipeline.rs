//! CSV import pipeline.
//!
//! # Stages
//!
//! 1. **Tokenize** - split text into a header and rectangular rows
//! 2. **Map headers** - fuzzy-match headers to schema fields; fatal errors stop here
//! 3. **Canonicalize** - normalize chain ids and booleans, recording conversions
//! 4. **Validate** - collect field issues for every cell of every row

use oli_ingest::read_csv_text;
use oli_map::map_headers;
use oli_model::{Diagnostic, ParseResult, ReferenceDataset, RowData, SchemaField, find_field};
use oli_transform::canonicalize_cell;
use oli_validate::{AddressValidator, HexAddressValidator, Validator};
use tracing::{debug, info, info_span, warn};

/// Runs CSV text through the import stages against one schema.
pub struct ImportPipeline<'a> {
    schema: &'a [SchemaField],
    reference: &'a ReferenceDataset,
    addresses: &'a dyn AddressValidator,
}

impl<'a> ImportPipeline<'a> {
    /// Pipeline using the shape-only address check.
    pub fn new(schema: &'a [SchemaField], reference: &'a ReferenceDataset) -> Self {
        Self {
            schema,
            reference,
            addresses: &HexAddressValidator,
        }
    }

    #[must_use]
    pub fn with_address_validator(mut self, addresses: &'a dyn AddressValidator) -> Self {
        self.addresses = addresses;
        self
    }

    pub fn parse(&self, text: &str) -> ParseResult {
        let span = info_span!("parse_csv", bytes = text.len(), fields = self.schema.len());
        let _guard = span.enter();

        let table = match read_csv_text(text) {
            Ok(table) => table,
            Err(error) => {
                warn!(%error, "Import aborted");
                return ParseResult::aborted(vec![Diagnostic::fatal(error.to_string())]);
            }
        };
        debug!(
            columns = table.headers.len(),
            rows = table.row_count(),
            "Tokenized input"
        );

        let (mapping, mut diagnostics) = map_headers(&table.headers, self.schema);
        if diagnostics.iter().any(Diagnostic::is_fatal) {
            warn!(
                fatal = diagnostics.iter().filter(|d| d.is_fatal()).count(),
                "Header mapping failed"
            );
            return ParseResult::aborted(diagnostics);
        }
        diagnostics.extend(table.diagnostics);

        let columns: Vec<(usize, &SchemaField)> = mapping
            .columns
            .iter()
            .enumerate()
            .filter_map(|(index, column)| {
                let field = find_field(self.schema, column.field_id.as_deref()?)?;
                Some((index, field))
            })
            .collect();

        let validator = Validator::new(self.reference, self.addresses);
        let mut rows = Vec::with_capacity(table.rows.len());
        let mut conversions = Vec::new();
        for (row_index, cells) in table.rows.iter().enumerate() {
            let mut row = RowData::new();
            for &(column, field) in &columns {
                let raw = cells.get(column).map_or("", String::as_str);
                let (value, conversion) = canonicalize_cell(row_index, field, raw, self.reference);
                diagnostics.extend(validator.validate_cell(
                    field,
                    row_index,
                    &value,
                    conversion.as_ref(),
                ));
                conversions.extend(conversion);
                row.insert(field.id, value);
            }
            rows.push(row);
        }

        let result = ParseResult {
            rows,
            mapped_columns: columns.iter().map(|&(_, field)| *field).collect(),
            diagnostics,
            conversions,
        };
        info!(
            rows = result.rows.len(),
            blocking = result.blocking_count(),
            warnings = result.warning_count(),
            conversions = result.conversions.len(),
            "Parsed CSV"
        );
        result
    }
}

/// Parses CSV text against `schema` with the shape-only address check.
pub fn parse_csv(text: &str, schema: &[SchemaField], reference: &ReferenceDataset) -> ParseResult {
    ImportPipeline::new(schema, reference).parse(text)
}

/// Parses CSV text with a caller-supplied address validator.
pub fn parse_csv_with(
    text: &str,
    schema: &[SchemaField],
    reference: &ReferenceDataset,
    addresses: &dyn AddressValidator,
) -> ParseResult {
    ImportPipeline::new(schema, reference)
        .with_address_validator(addresses)
        .parse(text)
}
