pub mod csv;
pub mod error;

pub use crate::csv::{CsvTable, load_csv_text, read_csv_text, tokenize, tokenize_line, write_rows};
pub use crate::error::{IngestError, Result};
