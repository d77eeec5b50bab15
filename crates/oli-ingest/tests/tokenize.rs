//! Tokenizer and writer properties.

use oli_ingest::{read_csv_text, tokenize, write_rows};
use oli_model::RowData;
use proptest::prelude::*;

#[test]
fn quoted_header_cells_are_unwrapped() {
    let rows = tokenize("\"Address\", \"Chain\" ,Usage Category\n0x1,base,dex\n");
    assert_eq!(rows[0], vec!["Address", "Chain", "Usage Category"]);
}

#[test]
fn unterminated_quote_keeps_row_width() {
    let table = read_csv_text("a,b,c\n1,\"open,2,3\n").unwrap();
    assert_eq!(table.rows[0], vec!["1", "\"open,2,3", ""]);
    assert!(table.diagnostics.is_empty());
}

fn cell() -> impl Strategy<Value = String> {
    // Printable ASCII without line breaks.
    "[ -~]{0,12}"
}

proptest! {
    #[test]
    fn written_rows_read_back_unchanged(
        values in prop::collection::vec(prop::collection::vec(cell(), 3), 1..6)
    ) {
        let columns = ["address", "chain_id", "contract_name"];
        let rows: Vec<RowData> = values
            .iter()
            .map(|cells| {
                let mut row = RowData::new();
                for (column, value) in columns.iter().zip(cells) {
                    row.insert(*column, value.clone());
                }
                row
            })
            .collect();

        let text = write_rows(&columns, &rows).unwrap();
        let table = read_csv_text(&text).unwrap();

        prop_assert_eq!(&table.headers, &columns.map(String::from).to_vec());
        prop_assert_eq!(table.rows.len(), rows.len());
        for (parsed, original) in table.rows.iter().zip(&rows) {
            for (idx, column) in columns.iter().enumerate() {
                prop_assert_eq!(parsed[idx].as_str(), original.value(column));
            }
        }
    }
}
