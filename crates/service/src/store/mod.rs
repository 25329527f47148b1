//! Schemaless document store seam.
//!
//! The content layer only needs to insert a JSON object into a named
//! collection and read a collection back. Implementations assign the
//! document identifier and never validate content.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use configs::DatabaseConfig;
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::errors::{ServiceError, StoreError};

pub mod memory;
pub mod seaorm;

pub use memory::MemoryDocumentStore;
pub use seaorm::SeaOrmDocumentStore;

/// A stored document as read back from a collection.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub collection: String,
    pub created_at: DateTime<Utc>,
    pub fields: Map<String, Value>,
}

/// Field equality constraints; an empty filter matches every document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter(Map<String, Value>);

impl Filter {
    pub fn all() -> Self { Self::default() }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn matches(&self, fields: &Map<String, Value>) -> bool {
        self.0.iter().all(|(k, v)| fields.get(k) == Some(v))
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Database name reported by diagnostics.
    fn name(&self) -> String;

    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Persist `fields` as a new document and return the assigned identifier.
    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<Uuid, StoreError>;

    /// Every document of `collection` matching `filter`. Order is not part of the contract.
    async fn find_all(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    async fn count(&self, collection: &str) -> Result<u64, StoreError>;

    /// Names of non-empty collections, sorted, at most `limit`.
    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError>;
}

/// Build the store named by `database.url`:
/// - `memory://<name>` process-local store
/// - `json://<path>` process-local store snapshotted to a JSON file
/// - anything else goes to SeaORM (`postgres://`, `sqlite:`)
pub async fn open_store(cfg: &DatabaseConfig) -> Result<Arc<dyn DocumentStore>, ServiceError> {
    let url = cfg
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ServiceError::unavailable("DATABASE_URL is not set"))?;

    let name = cfg
        .name
        .clone()
        .or_else(|| models::db::database_name_from_url(url))
        .unwrap_or_else(|| "content".to_string());

    if url.starts_with("memory://") {
        info!(event = "store_open", backend = "memory", %name, "using in-memory document store");
        return Ok(Arc::new(MemoryDocumentStore::new(name)));
    }
    if let Some(path) = url.strip_prefix("json://") {
        info!(event = "store_open", backend = "json", %path, "using JSON file document store");
        let store = MemoryDocumentStore::open(name, path).await?;
        return Ok(Arc::new(store));
    }

    let store = SeaOrmDocumentStore::connect(url, cfg, name).await?;
    Ok(Arc::new(store))
}
