//! Repository implementations for database access
//!
//! - `ContainerRepo`: counting, listing, searching, contents join, container CRUD
//! - `ItemRepo`: item CRUD and conditional moves between containers

pub mod containers;
pub mod items;

pub use containers::ContainerRepo;
pub use items::ItemRepo;

use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::{Result, StoreError};

/// Begin a transaction that holds the write lock from its first statement.
///
/// A deferred `BEGIN` that reads before writing fails with `SQLITE_BUSY` when
/// another connection commits in between; `BEGIN IMMEDIATE` waits on
/// `busy_timeout` instead.
pub(crate) async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>> {
    pool.begin_with("BEGIN IMMEDIATE")
        .await
        .map_err(|e| StoreError::transaction("begin", e))
}
