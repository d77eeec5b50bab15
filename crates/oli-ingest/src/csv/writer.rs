use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use oli_model::RowData;

use crate::error::{IngestError, Result};

/// Serializes rows as CSV with `columns` as the header.
///
/// Every cell is quoted so leading and trailing whitespace survive a re-read.
pub fn write_rows(columns: &[&str], rows: &[RowData]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(columns.iter().map(|column| row.value(column)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| IngestError::Flush(error.to_string()))?;
    String::from_utf8(bytes).map_err(|error| IngestError::Flush(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_every_cell() {
        let mut row = RowData::new();
        row.insert("address", "0xabc");
        row.insert("contract_name", "Pool, \"v2\"");
        let text = write_rows(&["address", "contract_name", "is_proxy"], &[row]).unwrap();
        assert_eq!(
            text,
            "\"address\",\"contract_name\",\"is_proxy\"\n\"0xabc\",\"Pool, \"\"v2\"\"\",\"\"\n"
        );
    }
}
