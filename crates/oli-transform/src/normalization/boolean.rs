//! Boolean token normalization.

pub const TRUE: &str = "true";
pub const FALSE: &str = "false";

/// Canonical boolean for a recognized token, case-insensitive.
pub fn resolve_boolean(value: &str) -> Option<&'static str> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Some(TRUE),
        "0" | "false" | "no" => Some(FALSE),
        _ => None,
    }
}

/// True for the two canonical boolean strings.
pub fn is_canonical_boolean(value: &str) -> bool {
    value == TRUE || value == FALSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tokens() {
        assert_eq!(resolve_boolean("YES"), Some("true"));
        assert_eq!(resolve_boolean(" 0 "), Some("false"));
        assert_eq!(resolve_boolean("No"), Some("false"));
        assert_eq!(resolve_boolean("y"), None);
        assert_eq!(resolve_boolean(""), None);
    }

    #[test]
    fn canonical_forms_are_lowercase_only() {
        assert!(is_canonical_boolean("true"));
        assert!(is_canonical_boolean("false"));
        assert!(!is_canonical_boolean("True"));
        assert!(!is_canonical_boolean("1"));
    }
}
