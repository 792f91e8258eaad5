//! Durable CRUD over the wishes table.
//!
//! `WishStore` is the one handle to the backing SQLite file, constructed
//! once at process start and passed by clone to request handlers. Mutations
//! return the affected-row count; translating a zero count into a not-found
//! outcome is the service layer's job, never the store's.

use chrono::Utc;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::errors::StoreError;
use crate::{db, wish};

#[derive(Clone)]
pub struct WishStore {
    db: DatabaseConnection,
}

impl WishStore {
    /// Open (or create, with `mode=rwc`) the backing database.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        Self::connect_with_config(url, &DatabaseConfig::default()).await
    }

    pub async fn connect_with_config(
        url: &str,
        cfg: &DatabaseConfig,
    ) -> Result<Self, StoreError> {
        let db = db::connect_to(url, cfg).await?;
        Ok(Self { db })
    }

    /// Ensure the schema exists. Safe to call on every start: the migrator
    /// creates the table `if_not_exists` and records applied migrations.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        migration::Migrator::up(&self.db, None).await?;
        info!(event = "store_initialized", "wishes schema ready");
        Ok(())
    }

    /// Explicit lifecycle end; closes the underlying pool. Clones of this
    /// store observe the closed pool and start failing with `Unavailable`.
    pub async fn close(self) -> Result<(), StoreError> {
        self.db.close().await?;
        Ok(())
    }

    /// All wishes, newest first (id descending).
    pub async fn list(&self) -> Result<Vec<wish::Model>, StoreError> {
        let rows = wish::Entity::find()
            .order_by_desc(wish::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Insert a wish with `fulfilled=false` and `created_at=now`; returns
    /// the assigned id.
    pub async fn create(&self, item: &str) -> Result<i64, StoreError> {
        let created_at = Utc::now().timestamp();
        let inserted = wish::ActiveModel {
            item: Set(item.to_owned()),
            fulfilled: Set(false),
            created_at: Set(created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(inserted.id)
    }

    /// Set `fulfilled=true` on the matching row. Returns the affected-row
    /// count: 0 when the id is absent. SQLite counts a matched row even
    /// when the flag was already true, so retries keep reporting 1.
    pub async fn fulfill(&self, id: i64) -> Result<u64, StoreError> {
        let res = wish::Entity::update_many()
            .col_expr(wish::Column::Fulfilled, Expr::value(true))
            .filter(wish::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Physical delete of the matching row, same count contract as
    /// `fulfill`.
    pub async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let res = wish::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
