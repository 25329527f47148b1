use async_trait::async_trait;
use chrono::Utc;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::document;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use serde_json::{Map, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{Document, DocumentStore, Filter};
use crate::errors::{ServiceError, StoreError};

/// SeaORM-backed store: every document is one row of the `document` table.
pub struct SeaOrmDocumentStore {
    pub db: DatabaseConnection,
    name: String,
}

impl SeaOrmDocumentStore {
    pub fn new(db: DatabaseConnection, name: impl Into<String>) -> Self {
        Self { db, name: name.into() }
    }

    /// Connect and, unless disabled, bring the schema up to date.
    pub async fn connect(url: &str, cfg: &DatabaseConfig, name: String) -> Result<Self, ServiceError> {
        let db = models::db::connect_url(url, cfg).await?;
        if cfg.auto_migrate {
            migration::Migrator::up(&db, None).await.map_err(map_db_err)?;
            info!(event = "migrations_applied", db = %name, "document schema is up to date");
        }
        Ok(Self::new(db, name))
    }
}

fn map_db_err(e: DbErr) -> StoreError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Unavailable(e.to_string()),
        other => StoreError::Db(other.to_string()),
    }
}

fn decode(row: document::Model) -> Result<Document, StoreError> {
    let Value::Object(fields) = row.body else {
        return Err(StoreError::Codec {
            collection: row.collection,
            id: row.id,
            message: "body is not a JSON object".into(),
        });
    };
    Ok(Document {
        id: row.id,
        collection: row.collection,
        created_at: row.created_at.with_timezone(&Utc),
        fields,
    })
}

#[async_trait]
impl DocumentStore for SeaOrmDocumentStore {
    fn name(&self) -> String { self.name.clone() }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.ping().await.map_err(map_db_err)
    }

    #[instrument(skip(self, fields))]
    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let am = document::ActiveModel {
            id: Set(id),
            collection: Set(collection.to_string()),
            body: Set(Value::Object(fields)),
            created_at: Set(Utc::now().into()),
        };
        document::Entity::insert(am).exec(&self.db).await.map_err(map_db_err)?;
        Ok(id)
    }

    async fn find_all(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let rows = document::Entity::find()
            .filter(document::Column::Collection.eq(collection))
            .order_by_asc(document::Column::CreatedAt)
            .order_by_asc(document::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;
        let mut docs = Vec::with_capacity(rows.len());
        for row in rows {
            let doc = decode(row)?;
            if filter.matches(&doc.fields) {
                docs.push(doc);
            }
        }
        Ok(docs)
    }

    async fn count(&self, collection: &str) -> Result<u64, StoreError> {
        document::Entity::find()
            .filter(document::Column::Collection.eq(collection))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn collection_names(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        document::Entity::find()
            .select_only()
            .column(document::Column::Collection)
            .distinct()
            .order_by_asc(document::Column::Collection)
            .limit(limit as u64)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }
}
