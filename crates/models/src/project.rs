use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{errors::ValidationError, fields::FieldReader, Content};

/// A case study in the portfolio.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub title: String,
    pub slug: String,
    pub summary: String,
    /// Cover image, absolute http(s) URL
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// External link, absolute http(s) URL
    pub link: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Content for Project {
    const COLLECTION: &'static str = "project";

    fn from_fields(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut r = FieldReader::new(map);
        let value = Project {
            title: r.required_str("title"),
            slug: r.required_str("slug"),
            summary: r.required_str("summary"),
            image: r.optional_url("image"),
            tags: r.str_list("tags"),
            link: r.optional_url("link"),
            featured: r.bool_or("featured", false),
        };
        r.finish(value)
    }
}
