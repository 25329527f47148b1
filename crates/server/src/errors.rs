use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::utils::text::truncate_chars;
use models::errors::ValidationError;
use serde_json::{json, Value};
use service::errors::ServiceError;
use tracing::error;

/// Longest server-side error detail sent to clients.
pub const MAX_DETAIL_CHARS: usize = 200;

/// Error response rendered as `{"error": title, "detail": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Value,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        let detail = match detail {
            Some(d) if status.is_server_error() => Value::String(truncate_chars(&d, MAX_DETAIL_CHARS)),
            Some(d) => Value::String(d),
            None => Value::Null,
        };
        Self { status, title: title.into(), detail }
    }

    /// 422 with one entry per offending field.
    pub fn validation(err: &ValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            title: "Validation Error".into(),
            detail: serde_json::to_value(&err.errors).unwrap_or(Value::Null),
        }
    }

    pub fn store_unavailable() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Error", Some("database not available".into()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match &e {
            ServiceError::Validation(v) => Self::validation(v),
            ServiceError::InvalidDocument { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Invalid Stored Document", Some(e.to_string()))
            }
            ServiceError::Storage(_) | ServiceError::Model(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Error", Some(e.to_string()))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        Self::new(r.status(), "Invalid Request Body", Some(r.body_text()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = %self.title, detail = %self.detail, "request failed");
        }
        (self.status, Json(json!({"error": self.title, "detail": self.detail}))).into_response()
    }
}
