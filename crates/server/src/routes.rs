use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod content;
pub mod system;

/// Build the full application router: status, diagnostics and content routes.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(system::root))
        .route("/test", get(system::test_database))
        .route("/openapi.json", get(system::openapi_json));

    let api = Router::new()
        .route("/api/services", get(content::list_services))
        .route("/api/projects", get(content::list_projects))
        .route("/api/testimonials", get(content::list_testimonials))
        .route("/api/inquiry", post(content::create_inquiry))
        .route("/api/seed", post(content::seed));

    public
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
