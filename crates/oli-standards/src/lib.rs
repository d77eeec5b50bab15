#![deny(unsafe_code)]

pub mod categories;
pub mod chains;
pub mod directory;
pub mod error;
pub mod schema;
pub mod validators;

use oli_model::{ProjectRecord, ReferenceDataset};

pub use crate::categories::{DEFAULT_CATEGORY, categories, category_aliases};
pub use crate::chains::{CHAIN_NAMESPACE, chain_aliases, chains};
pub use crate::directory::{
    CachePolicy, DEFAULT_PROJECTS_URL, HttpProjectSource, PROJECTS_URL_ENV, ProjectDirectory,
    ProjectSource, StaticProjectSource, decode_projects,
};
pub use crate::error::StandardsError;
pub use crate::schema::{LABEL_SCHEMA, PROJECT_SCHEMA, SchemaKind};

/// Builds the reference dataset from the static vocabularies and a project list.
pub fn reference_dataset(projects: Vec<ProjectRecord>) -> ReferenceDataset {
    ReferenceDataset::new(
        chains(),
        chain_aliases(),
        categories(),
        category_aliases(),
        projects,
    )
    .with_default_category(DEFAULT_CATEGORY)
}

/// Reference dataset backed by a project directory handle.
pub fn load_reference_dataset(directory: &ProjectDirectory) -> ReferenceDataset {
    reference_dataset(directory.projects().as_ref().clone())
}
