//! Schema field definitions for label and project import.
//!
//! A schema is a static slice of [`SchemaField`]s. Every field is identified by
//! its `id`; the `label` is the human-facing column name shown in templates and
//! used as a second matching target when reconciling CSV headers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ModelError;

/// Format check attached to a field. Returns an error message on failure.
pub type FieldValidator = fn(&str) -> Option<String>;

/// Reference vocabulary backing an enum-like field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocabulary {
    /// CAIP-2 chain identifiers.
    Chain,
    /// Usage category taxonomy.
    Category,
    /// Remote project directory.
    Project,
}

impl Vocabulary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vocabulary::Chain => "chain",
            Vocabulary::Category => "category",
            Vocabulary::Project => "project",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vocabulary {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chain" => Ok(Vocabulary::Chain),
            "category" => Ok(Vocabulary::Category),
            "project" => Ok(Vocabulary::Project),
            other => Err(ModelError::UnknownVocabulary(other.to_string())),
        }
    }
}

/// Value kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// `true` / `false` after canonicalization.
    Boolean,
    /// Closed or reference-backed vocabulary.
    Enum(Vocabulary),
    /// Hex account or contract address.
    AddressLike,
}

impl FieldKind {
    pub fn vocabulary(&self) -> Option<Vocabulary> {
        match self {
            FieldKind::Enum(vocabulary) => Some(*vocabulary),
            _ => None,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, FieldKind::Boolean)
    }
}

/// How a free-text field is compared against existing directory entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Similarity {
    /// Name-like text: containment or word overlap.
    Name,
    /// URL: hostname comparison.
    Url,
}

/// A single column of an import schema.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SchemaField {
    /// Stable identifier used as the row key.
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Whether the column must be present and every row must carry a value.
    pub required: bool,
    pub kind: FieldKind,
    /// Free-text duplicate check against the project directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<Similarity>,
    /// Optional format check run before vocabulary checks.
    #[serde(skip)]
    pub validator: Option<FieldValidator>,
}

impl SchemaField {
    pub const fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            required: false,
            kind,
            similarity: None,
            validator: None,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn with_similarity(mut self, similarity: Similarity) -> Self {
        self.similarity = Some(similarity);
        self
    }

    #[must_use]
    pub const fn with_validator(mut self, validator: FieldValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Runs the format validator, if any.
    pub fn check_format(&self, value: &str) -> Option<String> {
        self.validator.and_then(|validator| validator(value))
    }

    pub fn vocabulary(&self) -> Option<Vocabulary> {
        self.kind.vocabulary()
    }
}

impl PartialEq for SchemaField {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SchemaField {}

/// Finds a field by id in a schema.
pub fn find_field<'a>(schema: &'a [SchemaField], id: &str) -> Option<&'a SchemaField> {
    schema.iter().find(|field| field.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty(value: &str) -> Option<String> {
        value.is_empty().then(|| "empty".to_string())
    }

    #[test]
    fn builder_sets_flags() {
        let field = SchemaField::new("chain_id", "Chain", FieldKind::Enum(Vocabulary::Chain))
            .required()
            .with_validator(non_empty);
        assert!(field.required);
        assert_eq!(field.vocabulary(), Some(Vocabulary::Chain));
        assert_eq!(field.check_format(""), Some("empty".to_string()));
        assert_eq!(field.check_format("x"), None);
    }

    #[test]
    fn identity_is_the_id() {
        let a = SchemaField::new("website", "Website", FieldKind::Text);
        let b = SchemaField::new("website", "Homepage", FieldKind::Text)
            .with_similarity(Similarity::Url);
        assert_eq!(a, b);
    }

    #[test]
    fn vocabulary_parses_case_insensitively() {
        assert_eq!("Category".parse::<Vocabulary>().unwrap(), Vocabulary::Category);
        assert!("nope".parse::<Vocabulary>().is_err());
    }
}
