//! Fatal header mapping conditions.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Two header cells resolved to the same field.
    #[error("Duplicate column detected for field '{field}' (headers: {})", quoted(.headers))]
    DuplicateField { field: String, headers: Vec<String> },

    /// Required fields without a header.
    #[error("Missing required columns: {}", .labels.join(", "))]
    MissingRequired { labels: Vec<String> },
}

fn quoted(headers: &[String]) -> String {
    headers
        .iter()
        .map(|header| format!("'{header}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let duplicate = MappingError::DuplicateField {
            field: "Chain".to_string(),
            headers: vec!["chain".to_string(), "Chain ID".to_string()],
        };
        assert_eq!(
            duplicate.to_string(),
            "Duplicate column detected for field 'Chain' (headers: 'chain', 'Chain ID')"
        );
        let missing = MappingError::MissingRequired {
            labels: vec!["Address".to_string(), "Chain".to_string()],
        };
        assert_eq!(missing.to_string(), "Missing required columns: Address, Chain");
    }
}
