pub mod diagnostic;
pub mod error;
pub mod lookup;
pub mod reference;
pub mod schema;
pub mod table;

pub use diagnostic::{ConversionRecord, Diagnostic, FieldIssue, Severity, cell_key};
pub use error::{ModelError, Result};
pub use lookup::CaseInsensitiveSet;
pub use reference::{CategoryEntry, ChainEntry, ProjectRecord, ReferenceDataset};
pub use schema::{FieldKind, FieldValidator, SchemaField, Similarity, Vocabulary, find_field};
pub use table::{ColumnMapping, HeaderMapping, ParseResult, RowData};
