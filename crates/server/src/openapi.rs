use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct MessageResponseDoc { pub message: String }

#[derive(ToSchema)]
pub struct StatusResponseDoc { pub status: String }

/// `detail` is a string, or the list of field errors for 422 responses.
#[derive(ToSchema)]
pub struct ErrorResponseDoc {
    pub error: String,
    #[schema(value_type = Object)]
    pub detail: serde_json::Value,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "ServiceMedia Clone API"),
    paths(
        crate::routes::system::root,
        crate::routes::system::test_database,
        crate::routes::content::list_services,
        crate::routes::content::list_projects,
        crate::routes::content::list_testimonials,
        crate::routes::content::create_inquiry,
        crate::routes::content::seed,
    ),
    components(
        schemas(
            MessageResponseDoc,
            StatusResponseDoc,
            ErrorResponseDoc,
            models::Service,
            models::Project,
            models::Testimonial,
            models::Inquiry,
            models::FieldError,
            models::FieldErrorKind,
            service::diagnostics::Diagnostics,
        )
    ),
    tags(
        (name = "system"),
        (name = "content")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/test", "/api/services", "/api/projects", "/api/testimonials", "/api/inquiry", "/api/seed"] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}
