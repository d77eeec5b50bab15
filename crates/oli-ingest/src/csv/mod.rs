//! CSV reading and writing.

mod reader;
mod tokenize;
mod writer;

pub use reader::{CsvTable, load_csv_text, read_csv_text};
pub use tokenize::{tokenize, tokenize_line};
pub use writer::write_rows;
