use std::sync::Arc;

use configs::DatabaseConfig;
use service::{open_store, ContentService, DocumentStore};
use tracing::{error, info, warn};

use crate::errors::JsonApiError;

/// Shared request state. Holds the one store handle opened at startup;
/// `content` is `None` when no store could be opened.
#[derive(Clone)]
pub struct AppState {
    pub content: Option<ContentService>,
    pub database_url_set: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { content: Some(ContentService::new(store)), database_url_set: true }
    }

    /// State for a process running without a store.
    pub fn without_store(database_url_set: bool) -> Self {
        Self { content: None, database_url_set }
    }

    /// Open the configured store. Failure is logged and the API starts
    /// without one, so `/` and `/test` keep answering.
    pub async fn connect(cfg: &DatabaseConfig) -> Self {
        if !cfg.is_url_set() {
            warn!(event = "store_missing", "DATABASE_URL not set; content routes will fail");
            return Self::without_store(false);
        }
        match open_store(cfg).await {
            Ok(store) => {
                info!(event = "store_ready", db = %store.name(), "document store ready");
                Self::new(store)
            }
            Err(e) => {
                error!(event = "store_open_failed", error = %e, "cannot open document store; continuing without it");
                Self::without_store(true)
            }
        }
    }

    pub fn content(&self) -> Result<&ContentService, JsonApiError> {
        self.content.as_ref().ok_or_else(JsonApiError::store_unavailable)
    }

    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        self.content.as_ref().map(ContentService::store)
    }
}
