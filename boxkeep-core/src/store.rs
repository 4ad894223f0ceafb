//! Inventory store handle
//!
//! The one object glue code needs: open it at startup, clone it into whatever
//! serves requests, close it on shutdown.

use sqlx::SqlitePool;

use crate::config::StoreConfig;
use crate::db::{self, ContainerRepo, ItemRepo};
use crate::error::Result;

/// Explicitly constructed handle over the store's connection pool.
///
/// Cloning is cheap and shares the same pool.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    pool: SqlitePool,
}

impl InventoryStore {
    /// Open or create the store and ensure the schema exists.
    ///
    /// # Errors
    ///
    /// `StoreUnavailable` if the target cannot be opened, `SchemaFailed` if the
    /// relations cannot be created. Both are unrecoverable startup conditions.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = InventoryStore::open(&StoreConfig::from_env()).await?;
    /// let id = store.containers().create("Garage", Some("A1")).await?;
    /// ```
    pub async fn open(config: &StoreConfig) -> Result<Self> {
        let pool = db::initialize(config).await?;
        Ok(Self { pool })
    }

    /// Wrap an already configured pool, applying the schema to it.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        db::apply_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn containers(&self) -> ContainerRepo<'_> {
        ContainerRepo::new(&self.pool)
    }

    pub fn items(&self) -> ItemRepo<'_> {
        ItemRepo::new(&self.pool)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Pending operations finish first.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("inventory store closed");
    }
}
