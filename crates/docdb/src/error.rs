use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocDbError {
    /// A write addressed a root key the document does not contain.
    #[error("Key not found in DB records [{0}]")]
    KeyNotFound(String),

    /// A write or delete tried to descend through a value that is not a mapping.
    #[error("Cannot descend into non-mapping value at [{path}]")]
    NotAMapping { path: String },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid document store path {}: {}", .0.display(), .1)]
    InvalidStorePath(PathBuf, String),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, DocDbError>;
