//! Line-oriented CSV tokenizer.
//!
//! Records never span lines: the input is split on `\n` first, then each line
//! is split on commas outside double quotes. Inside quotes `""` is a literal
//! quote. An unterminated quote swallows the rest of its line as literal text.

const BOM: char = '\u{feff}';

/// Splits raw CSV text into rows of cells, skipping blank lines.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    text.trim_start_matches(BOM)
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(tokenize_line)
        .collect()
}

/// Splits one line into trimmed, unquoted cells.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote stays doubled until the cell is unwrapped.
                current.push_str("\"\"");
                chars.next();
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => {
                cells.push(finish_cell(&current));
                current.clear();
            }
            _ => current.push(c),
        }
    }

    cells.push(finish_cell(&current));
    cells
}

/// Trims a raw cell and, when it is wrapped in quotes, unwraps and unescapes it.
fn finish_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_line() {
        assert_eq!(tokenize_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn quoted_comma() {
        assert_eq!(
            tokenize_line("\"hello, world\",b,c"),
            vec!["hello, world", "b", "c"]
        );
    }

    #[test]
    fn escaped_quotes() {
        assert_eq!(
            tokenize_line("\"he said \"\"hello\"\"\",b"),
            vec!["he said \"hello\"", "b"]
        );
    }

    #[test]
    fn cells_are_trimmed_before_unwrapping() {
        assert_eq!(tokenize_line("  a  ,  \" b \"  "), vec!["a", " b "]);
    }

    #[test]
    fn unterminated_quote_is_literal() {
        assert_eq!(tokenize_line("x,\"abc,def"), vec!["x", "\"abc,def"]);
    }

    #[test]
    fn empty_cells_are_kept() {
        assert_eq!(tokenize_line("a,,\"\","), vec!["a", "", "", ""]);
    }

    #[test]
    fn lone_quote_cell() {
        assert_eq!(tokenize_line("\"\"\"\""), vec!["\""]);
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let rows = tokenize("\u{feff}address,chain_id\r\n\r\n  \n0xabc,base\r\n");
        assert_eq!(
            rows,
            vec![vec!["address", "chain_id"], vec!["0xabc", "base"]]
        );
    }
}
