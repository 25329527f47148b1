//! Create `document` table.
//! Holds schemaless JSON objects grouped by collection name.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Document::Table)
                    .if_not_exists()
                    .col(uuid(Document::Id).primary_key())
                    .col(string_len(Document::Collection, 64).not_null())
                    .col(json(Document::Body).not_null())
                    .col(timestamp_with_time_zone(Document::CreatedAt).not_null())
                    .to_owned(),
            )
            .await?;

        // Every read is scoped to one collection
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_document_collection_created_at")
                    .table(Document::Table)
                    .col(Document::Collection)
                    .col(Document::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Document::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Document {
    Table,
    Id,
    Collection,
    Body,
    CreatedAt,
}
