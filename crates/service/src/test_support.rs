#![cfg(test)]
use async_trait::async_trait;
use configs::DatabaseConfig;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::store::{Document, DocumentStore, Filter, SeaOrmDocumentStore};

/// Fresh migrated SQLite in-memory store; each call gets its own database.
pub async fn sqlite_store() -> Result<SeaOrmDocumentStore, anyhow::Error> {
    let cfg = DatabaseConfig { url: Some("sqlite::memory:".into()), ..Default::default() };
    let store = SeaOrmDocumentStore::connect("sqlite::memory:", &cfg, "memory".into()).await?;
    Ok(store)
}

/// A store whose every operation fails as if the server were gone.
pub struct UnreachableStore;

fn gone() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    fn name(&self) -> String { "unreachable".into() }
    async fn ping(&self) -> Result<(), StoreError> { Err(gone()) }
    async fn insert(&self, _: &str, _: Map<String, Value>) -> Result<Uuid, StoreError> { Err(gone()) }
    async fn find_all(&self, _: &str, _: &Filter) -> Result<Vec<Document>, StoreError> { Err(gone()) }
    async fn count(&self, _: &str) -> Result<u64, StoreError> { Err(gone()) }
    async fn collection_names(&self, _: usize) -> Result<Vec<String>, StoreError> { Err(gone()) }
}
