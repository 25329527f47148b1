use axum::{extract::rejection::JsonRejection, extract::State, Json};
use common::types::StatusResponse;
use models::{Content, Inquiry, Project, Service, Testimonial};
use serde_json::Value;
use tracing::info;

use crate::{errors::JsonApiError, state::AppState};

#[utoipa::path(
    get, path = "/api/services", tag = "content",
    responses(
        (status = 200, description = "All services", body = [Service]),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn list_services(State(state): State<AppState>) -> Result<Json<Vec<Service>>, JsonApiError> {
    let list = state.content()?.list_services().await?;
    info!(count = list.len(), "list services");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/projects", tag = "content",
    responses(
        (status = 200, description = "All projects", body = [Project]),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, JsonApiError> {
    let list = state.content()?.list_projects().await?;
    info!(count = list.len(), "list projects");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/testimonials", tag = "content",
    responses(
        (status = 200, description = "All testimonials", body = [Testimonial]),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn list_testimonials(State(state): State<AppState>) -> Result<Json<Vec<Testimonial>>, JsonApiError> {
    let list = state.content()?.list_testimonials().await?;
    info!(count = list.len(), "list testimonials");
    Ok(Json(list))
}

/// Accept a contact-form submission. The body is taken as raw JSON so that
/// every schema violation is reported per field.
#[utoipa::path(
    post, path = "/api/inquiry", tag = "content",
    request_body = Inquiry,
    responses(
        (status = 200, description = "Stored", body = crate::openapi::StatusResponseDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StatusResponse>, JsonApiError> {
    let Json(payload) = payload?;
    let content = match state.content() {
        Ok(content) => content,
        Err(unavailable) => {
            // schema errors win over a missing store
            Inquiry::from_value(&payload).map_err(|e| JsonApiError::validation(&e))?;
            return Err(unavailable);
        }
    };
    content.create_inquiry(&payload).await?;
    Ok(Json(StatusResponse::ok()))
}

/// Insert demo data into whichever content collections are empty.
#[utoipa::path(
    post, path = "/api/seed", tag = "content",
    responses(
        (status = 200, description = "Seeded (or already populated)", body = crate::openapi::StatusResponseDoc),
        (status = 500, description = "Storage Error", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn seed(State(state): State<AppState>) -> Result<Json<StatusResponse>, JsonApiError> {
    let report = state.content()?.seed().await?;
    info!(inserted = report.total(), "seed request handled");
    Ok(Json(StatusResponse::seeded()))
}
