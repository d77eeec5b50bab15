use std::path::Path;

use oli_model::Diagnostic;
use tracing::debug;

use super::tokenize::tokenize;
use crate::error::{IngestError, Result};

/// Header row plus rectangular data rows.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    /// Data rows, each exactly `headers.len()` cells wide.
    pub rows: Vec<Vec<String>>,
    /// Ragged-row warnings.
    pub diagnostics: Vec<Diagnostic>,
}

impl CsvTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Tokenizes CSV text into a header and data rows.
///
/// Rows longer than the header lose their surplus cells with a warning; short
/// rows are padded with empty cells.
pub fn read_csv_text(text: &str) -> Result<CsvTable> {
    let mut lines = tokenize(text).into_iter();
    let (Some(headers), Some(first)) = (lines.next(), lines.next()) else {
        return Err(IngestError::TooFewLines);
    };

    let width = headers.len();
    let mut rows = Vec::new();
    let mut diagnostics = Vec::new();
    for (row_index, mut row) in std::iter::once(first).chain(lines).enumerate() {
        if row.len() > width {
            debug!(row_index, cells = row.len(), width, "Truncating ragged row");
            diagnostics.push(Diagnostic::row_warning(
                row_index,
                format!(
                    "Row {} has more cells than header; extra cells ignored",
                    row_index + 1
                ),
            ));
        }
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(CsvTable {
        headers,
        rows,
        diagnostics,
    })
}

/// Reads a UTF-8 CSV file from disk.
pub fn load_csv_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| IngestError::Encoding {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_is_too_short() {
        assert!(matches!(
            read_csv_text("address,chain_id\n"),
            Err(IngestError::TooFewLines)
        ));
        assert!(matches!(read_csv_text("\n \n"), Err(IngestError::TooFewLines)));
    }

    #[test]
    fn ragged_rows_are_truncated_with_warning() {
        let table = read_csv_text("a,b\n1,2,3\n4\n").unwrap();
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["4", ""]]);
        assert_eq!(table.diagnostics.len(), 1);
        assert_eq!(
            table.diagnostics[0],
            Diagnostic::row_warning(0, "Row 1 has more cells than header; extra cells ignored")
        );
    }
}
