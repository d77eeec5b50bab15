//! Static import schemas.

use std::fmt;
use std::str::FromStr;

use oli_model::{FieldKind, ModelError, SchemaField, Similarity, Vocabulary};

use crate::validators;

/// Label rows: one address tag per row.
pub static LABEL_SCHEMA: &[SchemaField] = &[
    SchemaField::new("address", "Address", FieldKind::AddressLike).required(),
    SchemaField::new("chain_id", "Chain", FieldKind::Enum(Vocabulary::Chain)).required(),
    SchemaField::new("contract_name", "Contract Name", FieldKind::Text)
        .with_validator(validators::contract_name),
    SchemaField::new(
        "owner_project",
        "Owner Project",
        FieldKind::Enum(Vocabulary::Project),
    ),
    SchemaField::new(
        "usage_category",
        "Usage Category",
        FieldKind::Enum(Vocabulary::Category),
    ),
    SchemaField::new("is_eoa", "Is EOA", FieldKind::Boolean),
    SchemaField::new("is_contract", "Is Contract", FieldKind::Boolean),
    SchemaField::new("is_factory_contract", "Is Factory Contract", FieldKind::Boolean),
    SchemaField::new("is_proxy", "Is Proxy", FieldKind::Boolean),
    SchemaField::new("is_safe_contract", "Is Safe Contract", FieldKind::Boolean),
    SchemaField::new("source_code_verified", "Source Code Verified", FieldKind::Boolean),
    SchemaField::new("deployment_tx", "Deployment Tx", FieldKind::Text)
        .with_validator(validators::tx_hash),
    SchemaField::new("deployer_address", "Deployer Address", FieldKind::AddressLike),
    SchemaField::new("deployment_date", "Deployment Date", FieldKind::Text)
        .with_validator(validators::date),
    SchemaField::new("erc20_symbol", "ERC20 Symbol", FieldKind::Text),
    SchemaField::new("erc20_decimals", "ERC20 Decimals", FieldKind::Text)
        .with_validator(validators::token_decimals),
];

/// Project registration rows, checked for near-duplicates of listed projects.
pub static PROJECT_SCHEMA: &[SchemaField] = &[
    SchemaField::new("owner_project", "Project Name", FieldKind::Text)
        .required()
        .with_validator(validators::project_slug)
        .with_similarity(Similarity::Name),
    SchemaField::new("display_name", "Display Name", FieldKind::Text)
        .required()
        .with_similarity(Similarity::Name),
    SchemaField::new("description", "Description", FieldKind::Text)
        .with_validator(validators::description),
    SchemaField::new("website", "Website", FieldKind::Text)
        .with_validator(validators::url)
        .with_similarity(Similarity::Url),
    SchemaField::new("main_github", "GitHub", FieldKind::Text)
        .with_validator(validators::github_url)
        .with_similarity(Similarity::Url),
];

/// Which static schema an import runs against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SchemaKind {
    #[default]
    Labels,
    Projects,
}

impl SchemaKind {
    pub fn fields(&self) -> &'static [SchemaField] {
        match self {
            SchemaKind::Labels => LABEL_SCHEMA,
            SchemaKind::Projects => PROJECT_SCHEMA,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Labels => "labels",
            SchemaKind::Projects => "projects",
        }
    }

    /// Whether validating this schema consults the project directory.
    pub fn needs_project_directory(&self) -> bool {
        self.fields().iter().any(|field| {
            field.vocabulary() == Some(Vocabulary::Project) || field.similarity.is_some()
        })
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "labels" | "label" => Ok(SchemaKind::Labels),
            "projects" | "project" => Ok(SchemaKind::Projects),
            other => Err(ModelError::UnknownSchema(other.to_string())),
        }
    }
}
