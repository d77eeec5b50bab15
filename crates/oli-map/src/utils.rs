//! Header normalization helpers.

/// Normalizes a header or field name for comparison.
///
/// Lowercases and drops whitespace, `-` and `_`, so `Chain ID`, `chain_id`
/// and `chain-id` all become `chainid`.
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Maximum edit distance accepted for a normalized header.
///
/// Short headers tolerate a single edit; longer ones two.
pub fn distance_threshold(normalized: &str) -> usize {
    if normalized.chars().count() > 5 { 2 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize_header(" Chain ID "), "chainid");
        assert_eq!(normalize_header("owner-project"), "ownerproject");
        assert_eq!(normalize_header("Usage_Category"), "usagecategory");
    }

    #[test]
    fn threshold_depends_on_length() {
        assert_eq!(distance_threshold("chain"), 1);
        assert_eq!(distance_threshold("chainid"), 2);
    }
}
