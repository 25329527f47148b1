use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{errors::ValidationError, fields::FieldReader, Content};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub author: String,
    pub role: Option<String>,
    pub quote: String,
    pub company: Option<String>,
    pub avatar: Option<String>,
    /// Testimonials are featured unless told otherwise
    #[serde(default = "featured_default")]
    pub featured: bool,
}

fn featured_default() -> bool { true }

impl Content for Testimonial {
    const COLLECTION: &'static str = "testimonial";

    fn from_fields(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut r = FieldReader::new(map);
        let value = Testimonial {
            author: r.required_str("author"),
            role: r.optional_str("role"),
            quote: r.required_str("quote"),
            company: r.optional_str("company"),
            avatar: r.optional_url("avatar"),
            featured: r.bool_or("featured", featured_default()),
        };
        r.finish(value)
    }
}
