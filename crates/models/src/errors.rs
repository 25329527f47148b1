use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database error: {0}")]
    Db(String),
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Missing,
    WrongType,
    InvalidUrl,
    InvalidEmail,
    TooShort,
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self { field: field.into(), kind, message: message.into() }
    }
}

/// All field errors found while validating one payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", summary(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self { Self { errors } }

    pub fn single(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self { errors: vec![FieldError::new(field, kind, message)] }
    }

    /// Names of the offending fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn has(&self, field: &str, kind: FieldErrorKind) -> bool {
        self.errors.iter().any(|e| e.field == field && e.kind == kind)
    }
}

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
