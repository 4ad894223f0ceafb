//! Container repository
//!
//! Reads:
//! - count / list (created_at DESC, LIMIT/OFFSET) / substring search
//! - contents: LEFT JOIN from the container so an empty box still yields a row
//!
//! Writes:
//! - create / update (zero rows affected => NotFound)
//! - delete: items first, then the container, in one transaction

use sqlx::{Row, SqlitePool};

use crate::error::{Result, StoreError};
use crate::models::{Container, ContentRow, Item};
use super::begin_write;

/// Container repository
pub struct ContainerRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContainerRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Total number of containers currently stored.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM containers")
            .fetch_one(self.pool)
            .await
            .map_err(|e| StoreError::query("count containers", e))?;

        tracing::debug!(count, "counted containers");
        Ok(count)
    }

    /// Newest containers first, skipping `offset` rows and returning at most `limit`.
    ///
    /// Offset arithmetic is the caller's job (see `Pagination::offset`).
    pub async fn list(&self, offset: u64, limit: u32) -> Result<Vec<Container>> {
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        let containers: Vec<Container> = sqlx::query_as(
            r#"
            SELECT id, name, label, created_at
            FROM containers
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(self.pool)
        .await
        .map_err(|e| StoreError::query("list containers", e))?;

        tracing::debug!(offset, limit, returned = containers.len(), "listed containers");
        Ok(containers)
    }

    /// Containers whose name or label contains `pattern`.
    ///
    /// Uses SQLite `LIKE`, so matching is ASCII case-insensitive. Wildcard
    /// characters in `pattern` match literally. An empty pattern matches all.
    pub async fn find_by_text(&self, pattern: &str) -> Result<Vec<Container>> {
        let needle = format!("%{}%", escape_like(pattern));

        let containers: Vec<Container> = sqlx::query_as(
            r#"
            SELECT id, name, label, created_at
            FROM containers
            WHERE name LIKE ?1 ESCAPE '\'
               OR label LIKE ?1 ESCAPE '\'
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(needle)
        .fetch_all(self.pool)
        .await
        .map_err(|e| StoreError::query("search containers", e))?;

        tracing::debug!(pattern, matched = containers.len(), "searched containers");
        Ok(containers)
    }

    /// Get a single container by id.
    pub async fn get(&self, id: i64) -> Result<Container> {
        sqlx::query_as(
            r#"
            SELECT id, name, label, created_at
            FROM containers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StoreError::query("get container", e))?
        .ok_or_else(|| StoreError::not_found("container", id))
    }

    /// A container's items, newest first, each annotated with the container's
    /// name and label.
    ///
    /// The join starts from the container, so the result is empty only when the
    /// container itself is missing; that case is reported as `NotFound`. An empty
    /// container yields exactly one row with `item: None`.
    pub async fn contents(&self, id: i64) -> Result<Vec<ContentRow>> {
        let rows = sqlx::query(
            r#"
            SELECT
                c.id AS container_id,
                c.name AS container_name,
                c.label AS container_label,
                i.id AS item_id,
                i.name AS item_name,
                i.quantity AS item_quantity,
                i.added_at AS item_added_at
            FROM containers c
            LEFT JOIN items i ON i.container_id = c.id
            WHERE c.id = ?
            ORDER BY i.added_at DESC, i.id DESC
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| StoreError::query("get container contents", e))?;

        if rows.is_empty() {
            return Err(StoreError::not_found("container", id));
        }

        let contents = rows
            .iter()
            .map(|r| -> std::result::Result<ContentRow, sqlx::Error> {
                let container_id: i64 = r.try_get("container_id")?;
                let item_id: Option<i64> = r.try_get("item_id")?;
                let item = match item_id {
                    Some(item_id) => Some(Item {
                        id: item_id,
                        container_id,
                        name: r.try_get::<Option<String>, _>("item_name")?.unwrap_or_default(),
                        quantity: r.try_get::<Option<i64>, _>("item_quantity")?.unwrap_or_default(),
                        added_at: r.try_get("item_added_at")?,
                    }),
                    None => None,
                };

                Ok(ContentRow {
                    container_id,
                    container_name: r.try_get("container_name")?,
                    container_label: r.try_get("container_label")?,
                    item,
                })
            })
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()
            .map_err(|e| StoreError::query("decode container contents", e))?;

        tracing::debug!(container_id = id, rows = contents.len(), "loaded container contents");
        Ok(contents)
    }

    /// Insert a container and return its assigned id.
    ///
    /// Name and label are stored verbatim; names need not be unique.
    pub async fn create(&self, name: &str, label: Option<&str>) -> Result<i64> {
        let id = sqlx::query("INSERT INTO containers (name, label) VALUES (?, ?)")
            .bind(name)
            .bind(label)
            .execute(self.pool)
            .await
            .map_err(|e| StoreError::query("create container", e))?
            .last_insert_rowid();

        tracing::info!(container_id = id, name, "created container");
        Ok(id)
    }

    /// Replace a container's name and label.
    pub async fn update(&self, id: i64, name: &str, label: Option<&str>) -> Result<()> {
        let result = sqlx::query("UPDATE containers SET name = ?, label = ? WHERE id = ?")
            .bind(name)
            .bind(label)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| StoreError::query("update container", e))?;

        if result.rows_affected() == 0 {
            tracing::warn!(container_id = id, "update matched no container");
            return Err(StoreError::not_found("container", id));
        }

        tracing::info!(container_id = id, "updated container");
        Ok(())
    }

    /// Delete a container together with every item it holds (atomic).
    ///
    /// Items go first, then the container row. Either both statements commit
    /// or neither does.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = begin_write(self.pool).await?;

        let items_removed = sqlx::query("DELETE FROM items WHERE container_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::transaction("delete contents", e))?
            .rows_affected();

        let containers_removed = sqlx::query("DELETE FROM containers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::transaction("delete container", e))?
            .rows_affected();

        if containers_removed == 0 {
            // tx dropped here => rolled back
            tracing::warn!(container_id = id, "delete matched no container");
            return Err(StoreError::not_found("container", id));
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::transaction("commit", e))?;

        tracing::info!(container_id = id, items_removed, "deleted container");
        Ok(())
    }
}

/// Escape `LIKE` metacharacters so the pattern matches literally.
fn escape_like(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
