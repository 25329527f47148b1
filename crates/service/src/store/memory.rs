use std::{collections::BTreeMap, path::{Path, PathBuf}, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::{fs, sync::RwLock};
use uuid::Uuid;

use super::{Document, DocumentStore, Filter};
use crate::errors::StoreError;

/// On-disk shape of one document in the JSON snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredDocument {
    id: Uuid,
    created_at: DateTime<Utc>,
    fields: Map<String, Value>,
}

type Collections = BTreeMap<String, Vec<StoredDocument>>;

/// Process-local document store.
///
/// Documents are kept per collection in insertion order. When opened with a
/// file path the whole map is rewritten as JSON after every insert, which is
/// plenty for demo data and keeps a restart from losing it.
#[derive(Clone)]
pub struct MemoryDocumentStore {
    inner: Arc<RwLock<Collections>>,
    file_path: Option<PathBuf>,
    name: String,
}

impl MemoryDocumentStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { inner: Arc::new(RwLock::new(Collections::new())), file_path: None, name: name.into() }
    }

    /// Load a snapshot from `path`, creating an empty one if missing.
    pub async fn open<P: Into<PathBuf>>(name: impl Into<String>, path: P) -> Result<Self, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let map: Collections = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| StoreError::Io(format!("{}: {e}", file_path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = Collections::new();
                write_snapshot(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        Ok(Self { inner: Arc::new(RwLock::new(map)), file_path: Some(file_path), name: name.into() })
    }
}

/// Write to `<path>.tmp` and rename over `path`, so a crash never leaves a
/// half-written snapshot behind.
async fn write_snapshot(path: &Path, map: &Collections) -> Result<(), StoreError> {
    let data = serde_json::to_vec(map).map_err(|e| StoreError::Io(e.to_string()))?;
    let tmp = temp_path(path);
    fs::write(&tmp, data).await.map_err(|e| StoreError::Io(format!("{}: {e}", tmp.display())))?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::Io(format!("{}: {e}", path.display())));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn name(&self) -> String { self.name.clone() }

    async fn ping(&self) -> Result<(), StoreError> { Ok(()) }

    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let mut map = self.inner.write().await;
        map.entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, created_at: Utc::now(), fields });
        // snapshots are written while holding the write lock; a failed write rolls back
        if let Some(path) = &self.file_path {
            if let Err(e) = write_snapshot(path, &map).await {
                if let Some(docs) = map.get_mut(collection) {
                    docs.pop();
                }
                return Err(e);
            }
        }
        Ok(id)
    }

    async fn find_all(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let map = self.inner.read().await;
        let docs = map
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filter.matches(&d.fields))
                    .map(|d| Document {
                        id: d.id,
                        collection: collection.to_string(),
                        created_at: d.created_at,
                        fields: d.fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let map = self.inner.read().await;
        Ok(map.get(collection).map(|d| d.len() as u64).unwrap_or(0))
    }

    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        let map = self.inner.read().await;
        Ok(map
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .take(limit)
            .collect())
    }
}
