//! Item repository
//!
//! - create: verifies the owning container inside the insert transaction
//! - update: zero rows affected => NotFound
//! - delete: single statement, still wrapped in a transaction
//! - move: conditional reassignment (`container_id = source AND id = item`)

use sqlx::SqlitePool;

use crate::error::{Result, StoreError};
use crate::models::{Item, MoveOutcome};
use super::begin_write;

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a single item by id.
    pub async fn get(&self, id: i64) -> Result<Item> {
        sqlx::query_as(
            r#"
            SELECT id, container_id, name, quantity, added_at
            FROM items
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StoreError::query("get item", e))?
        .ok_or_else(|| StoreError::not_found("item", id))
    }

    /// Insert an item under `container_id` and return its assigned id.
    ///
    /// The container is checked in the same transaction as the insert, so an
    /// item can never be created pointing at a missing container.
    pub async fn create(&self, container_id: i64, name: &str, quantity: i64) -> Result<i64> {
        let mut tx = begin_write(self.pool).await?;

        let container_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM containers WHERE id = ?)")
                .bind(container_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| StoreError::transaction("check container", e))?;

        if !container_exists {
            tracing::warn!(container_id, "refusing to create item in missing container");
            return Err(StoreError::not_found("container", container_id));
        }

        let id = sqlx::query("INSERT INTO items (name, quantity, container_id) VALUES (?, ?, ?)")
            .bind(name)
            .bind(quantity)
            .bind(container_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::transaction("insert item", e))?
            .last_insert_rowid();

        tx.commit()
            .await
            .map_err(|e| StoreError::transaction("commit", e))?;

        tracing::info!(item_id = id, container_id, name, quantity, "created item");
        Ok(id)
    }

    /// Replace an item's name and quantity.
    pub async fn update(&self, id: i64, name: &str, quantity: i64) -> Result<()> {
        let result = sqlx::query("UPDATE items SET name = ?, quantity = ? WHERE id = ?")
            .bind(name)
            .bind(quantity)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| StoreError::query("update item", e))?;

        if result.rows_affected() == 0 {
            tracing::warn!(item_id = id, "update matched no item");
            return Err(StoreError::not_found("item", id));
        }

        tracing::info!(item_id = id, "updated item");
        Ok(())
    }

    /// Delete a single item.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = begin_write(self.pool).await?;

        let removed = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::transaction("delete item", e))?
            .rows_affected();

        if removed == 0 {
            tracing::warn!(item_id = id, "delete matched no item");
            return Err(StoreError::not_found("item", id));
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::transaction("commit", e))?;

        tracing::info!(item_id = id, "deleted item");
        Ok(())
    }

    /// Move an item from `source` to `destination`.
    ///
    /// Only applies when the item currently belongs to `source`; otherwise the
    /// transaction commits with no effect and `MoveOutcome::Unchanged` is
    /// returned rather than an error. A missing destination is `NotFound`.
    pub async fn move_item(&self, source: i64, destination: i64, item_id: i64) -> Result<MoveOutcome> {
        let mut tx = begin_write(self.pool).await?;

        let destination_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM containers WHERE id = ?)")
                .bind(destination)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| StoreError::transaction("check destination", e))?;

        if !destination_exists {
            tracing::warn!(item_id, destination, "refusing to move item into missing container");
            return Err(StoreError::not_found("container", destination));
        }

        let rows = sqlx::query(
            r#"
            UPDATE items
            SET container_id = ?
            WHERE container_id = ? AND id = ?
            "#,
        )
        .bind(destination)
        .bind(source)
        .bind(item_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| StoreError::transaction("reassign item", e))?
        .rows_affected();

        tx.commit()
            .await
            .map_err(|e| StoreError::transaction("commit", e))?;

        let outcome = MoveOutcome::from_rows_affected(rows);
        match outcome {
            MoveOutcome::Moved => {
                tracing::info!(item_id, source, destination, "moved item")
            }
            MoveOutcome::Unchanged => {
                tracing::debug!(item_id, source, destination, "item not in source container; move skipped")
            }
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::open_temp_store;
    use crate::{InventoryStore, StoreConfig};

    async fn snapshot(pool: &SqlitePool) -> Vec<(i64, i64, String, i64)> {
        sqlx::query_as("SELECT id, container_id, name, quantity FROM items ORDER BY id")
            .fetch_all(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_get() {
        let (_dir, store) = open_temp_store().await;
        let container = store.containers().create("Garage", Some("A1")).await.unwrap();

        let id = store.items().create(container, "Drill", 3).await.unwrap();
        let item = store.items().get(id).await.unwrap();

        assert_eq!(item.container_id, container);
        assert_eq!(item.name, "Drill");
        assert_eq!(item.quantity, 3);
    }

    #[tokio::test]
    async fn create_in_missing_container_is_not_found_and_inserts_nothing() {
        let (_dir, store) = open_temp_store().await;

        let err = store.items().create(77, "Ghost", 1).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                resource: "container",
                id: 77
            }
        ));
        assert!(snapshot(store.pool()).await.is_empty());
    }

    #[tokio::test]
    async fn negative_quantity_is_stored_as_given() {
        let (_dir, store) = open_temp_store().await;
        let container = store.containers().create("Garage", None).await.unwrap();

        let id = store.items().create(container, "IOU", -2).await.unwrap();
        assert_eq!(store.items().get(id).await.unwrap().quantity, -2);
    }

    #[tokio::test]
    async fn update_changes_name_and_quantity() {
        let (_dir, store) = open_temp_store().await;
        let container = store.containers().create("Garage", None).await.unwrap();
        let id = store.items().create(container, "Drill", 3).await.unwrap();

        store.items().update(id, "Cordless drill", 2).await.unwrap();

        let item = store.items().get(id).await.unwrap();
        assert_eq!(item.name, "Cordless drill");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.container_id, container);
    }

    #[tokio::test]
    async fn update_missing_item_is_not_found() {
        let (_dir, store) = open_temp_store().await;
        let err = store.items().update(5, "x", 1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_only_that_item() {
        let (_dir, store) = open_temp_store().await;
        let container = store.containers().create("Garage", None).await.unwrap();
        let drill = store.items().create(container, "Drill", 3).await.unwrap();
        let saw = store.items().create(container, "Saw", 1).await.unwrap();

        store.items().delete(drill).await.unwrap();

        assert!(store.items().get(drill).await.unwrap_err().is_not_found());
        assert_eq!(store.items().get(saw).await.unwrap().name, "Saw");
        assert!(store.items().delete(drill).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn move_reassigns_item() {
        let (_dir, store) = open_temp_store().await;
        let src = store.containers().create("Garage", None).await.unwrap();
        let dst = store.containers().create("Shed", None).await.unwrap();
        let item = store.items().create(src, "Drill", 3).await.unwrap();

        let outcome = store.items().move_item(src, dst, item).await.unwrap();

        assert_eq!(outcome, MoveOutcome::Moved);
        let moved = store.items().get(item).await.unwrap();
        assert_eq!(moved.container_id, dst);
        assert_ne!(moved.container_id, src);
    }

    #[tokio::test]
    async fn move_from_wrong_source_is_a_silent_no_op() {
        let (_dir, store) = open_temp_store().await;
        let a = store.containers().create("Garage", None).await.unwrap();
        let b = store.containers().create("Shed", None).await.unwrap();
        let c = store.containers().create("Attic", None).await.unwrap();
        let item = store.items().create(a, "Drill", 3).await.unwrap();
        store.items().create(b, "Rake", 1).await.unwrap();

        let before = snapshot(store.pool()).await;

        // Item is in `a`, not `b`
        let outcome = store.items().move_item(b, c, item).await.unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(snapshot(store.pool()).await, before);

        // Unknown item id
        let outcome = store.items().move_item(a, c, 9999).await.unwrap();
        assert_eq!(outcome, MoveOutcome::Unchanged);
        assert_eq!(snapshot(store.pool()).await, before);
    }

    #[tokio::test]
    async fn repeating_a_move_is_idempotent() {
        let (_dir, store) = open_temp_store().await;
        let src = store.containers().create("Garage", None).await.unwrap();
        let dst = store.containers().create("Shed", None).await.unwrap();
        let item = store.items().create(src, "Drill", 3).await.unwrap();

        assert!(store.items().move_item(src, dst, item).await.unwrap().is_moved());
        let after_first = snapshot(store.pool()).await;

        let again = store.items().move_item(src, dst, item).await.unwrap();
        assert_eq!(again, MoveOutcome::Unchanged);
        assert_eq!(snapshot(store.pool()).await, after_first);
    }

    #[tokio::test]
    async fn move_to_missing_destination_is_not_found_and_keeps_item() {
        let (_dir, store) = open_temp_store().await;
        let src = store.containers().create("Garage", None).await.unwrap();
        let item = store.items().create(src, "Drill", 3).await.unwrap();
        let before = snapshot(store.pool()).await;

        let err = store.items().move_item(src, 404, item).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::NotFound {
                resource: "container",
                id: 404
            }
        ));
        assert_eq!(snapshot(store.pool()).await, before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn writes_succeed_under_concurrent_connections() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::with_target(dir.path().join("boxes.db").display().to_string())
            .max_connections(8);
        let store = InventoryStore::open(&config).await.unwrap();
        let container = store.containers().create("Garage", None).await.unwrap();

        let mut handles = Vec::new();
        for n in 0..200 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.items().create(container, &format!("item-{n}"), n).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(snapshot(store.pool()).await.len(), 200);
    }
}
