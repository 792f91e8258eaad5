//! Create the `wishes` table.
//!
//! Schema mirrors the wire contract: auto-increment integer id, non-null
//! item text, fulfilled flag defaulting to false, creation time in epoch
//! seconds. `if_not_exists` keeps re-running the migrator on every start
//! safe.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishes::Table)
                    .if_not_exists()
                    .col(big_integer(Wishes::Id).primary_key().auto_increment())
                    .col(text(Wishes::Item).not_null())
                    .col(boolean(Wishes::Fulfilled).not_null().default(false))
                    .col(big_integer(Wishes::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wishes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Wishes {
    Table,
    Id,
    Item,
    Fulfilled,
    CreatedAt,
}
