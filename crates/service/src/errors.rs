use models::errors::ValidationError;
use thiserror::Error;
use uuid::Uuid;

/// Failures of the document store itself. Never retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database not available: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("corrupt document {id} in `{collection}`: {message}")]
    Codec { collection: String, id: Uuid, message: String },
    #[error("io error: {0}")]
    Io(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid stored document {id} in `{collection}`: {source}")]
    InvalidDocument {
        collection: String,
        id: Uuid,
        #[source]
        source: ValidationError,
    },
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn unavailable(reason: &str) -> Self {
        Self::Storage(StoreError::Unavailable(reason.to_string()))
    }
}
