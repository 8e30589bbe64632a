use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{0}")]
    Validation(String),

    #[error("Content not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Media error: {0}")]
    Media(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ContentError>;
