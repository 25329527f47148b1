use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{errors::ValidationError, fields::FieldReader, Content};

/// An offering shown on the services page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    /// Service name
    pub title: String,
    /// URL-friendly identifier; unique by convention only
    pub slug: String,
    /// Short blurb
    pub short: String,
    /// Detailed description
    pub description: Option<String>,
    /// Lucide icon name
    pub icon: Option<String>,
    /// Show in homepage highlights
    #[serde(default)]
    pub featured: bool,
}

impl Content for Service {
    const COLLECTION: &'static str = "service";

    fn from_fields(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut r = FieldReader::new(map);
        let value = Service {
            title: r.required_str("title"),
            slug: r.required_str("slug"),
            short: r.required_str("short"),
            description: r.optional_str("description"),
            icon: r.optional_str("icon"),
            featured: r.bool_or("featured", false),
        };
        r.finish(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldErrorKind;
    use serde_json::json;

    #[test]
    fn minimal_service_gets_defaults() {
        let map = json!({"title": "SEO", "slug": "seo", "short": "Rank"});
        let s = Service::from_fields(map.as_object().unwrap()).unwrap();
        assert_eq!(s.description, None);
        assert_eq!(s.icon, None);
        assert!(!s.featured);
    }

    #[test]
    fn identifier_and_unknown_fields_are_dropped() {
        let map = json!({
            "_id": "abc", "id": 7, "title": "SEO", "slug": "seo", "short": "Rank", "extra": true
        });
        let s = Service::from_fields(map.as_object().unwrap()).unwrap();
        let out = s.to_fields();
        assert!(!out.contains_key("_id"));
        assert!(!out.contains_key("id"));
        assert!(!out.contains_key("extra"));
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn required_fields_are_reported() {
        let map = json!({"title": "SEO", "featured": "yes"});
        let err = Service::from_fields(map.as_object().unwrap()).unwrap_err();
        assert!(err.has("slug", FieldErrorKind::Missing));
        assert!(err.has("short", FieldErrorKind::Missing));
        assert!(err.has("featured", FieldErrorKind::WrongType));
    }
}
