use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{errors::ValidationError, fields::FieldReader, Content};

pub const MESSAGE_MIN_CHARS: usize = 5;

/// A contact-form submission from a visitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// At least 5 characters
    pub message: String,
    /// Where the user came from
    pub source: Option<String>,
}

impl Content for Inquiry {
    const COLLECTION: &'static str = "inquiry";

    fn from_fields(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut r = FieldReader::new(map);
        let value = Inquiry {
            name: r.required_str("name"),
            email: r.email("email"),
            phone: r.optional_str("phone"),
            company: r.optional_str("company"),
            message: r.required_str_min("message", MESSAGE_MIN_CHARS),
            source: r.optional_str("source"),
        };
        r.finish(value)
    }
}
