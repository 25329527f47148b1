use axum::{extract::State, Json};
use common::types::MessageResponse;
use service::diagnostics::{self, Diagnostics};
use utoipa::OpenApi;

use crate::{openapi::ApiDoc, state::AppState};

pub const ROOT_MESSAGE: &str = "ServiceMedia Clone API running";

#[utoipa::path(get, path = "/", tag = "system", responses((status = 200, description = "API is up", body = crate::openapi::MessageResponseDoc)))]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(ROOT_MESSAGE))
}

/// Store diagnostics. Always 200; failures are described in the body.
#[utoipa::path(get, path = "/test", tag = "system", responses((status = 200, description = "Diagnostic report", body = Diagnostics)))]
pub async fn test_database(State(state): State<AppState>) -> Json<Diagnostics> {
    Json(diagnostics::diagnose(state.store(), state.database_url_set).await)
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
