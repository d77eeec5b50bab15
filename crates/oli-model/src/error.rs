use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown vocabulary: {0}")]
    UnknownVocabulary(String),
    #[error("unknown schema: {0}")]
    UnknownSchema(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
