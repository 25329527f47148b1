//! Schema definitions for the marketing content API and the storage entity
//! that holds them.
//!
//! Content types are validated from raw JSON objects with [`Content::from_fields`]
//! and never carry the store identifier.

use serde::Serialize;
use serde_json::{Map, Value};

pub mod errors;
pub mod db;
pub mod document;
pub mod fields;
pub mod service;
pub mod project;
pub mod testimonial;
pub mod inquiry;

pub use errors::{FieldError, FieldErrorKind, ValidationError};
pub use inquiry::Inquiry;
pub use project::Project;
pub use service::Service;
pub use testimonial::Testimonial;

/// A schema-validated record stored in a named collection.
pub trait Content: Serialize + Sized {
    /// Collection name: the lowercased entity name.
    const COLLECTION: &'static str;

    /// Validate a raw field map into the typed record.
    fn from_fields(map: &Map<String, Value>) -> Result<Self, ValidationError>;

    /// Validate any JSON value; non-objects are rejected.
    fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::from_fields(fields::as_object(value)?)
    }

    /// Field map as it is written to the store. Absent optionals become `null`.
    fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
