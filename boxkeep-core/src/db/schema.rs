//! Schema manager - opens the SQLite store and applies the schema
//!
//! Runs once per process. Failure here is a startup condition, not a
//! per-request error, so callers should treat it as fatal.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

const SCHEMA: &str = include_str!("schema.sql");

/// How long a connection waits on the engine's file lock before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (or create) the store at `config.target` and make sure both relations exist.
pub async fn initialize(config: &StoreConfig) -> Result<SqlitePool> {
    let options = connect_options(config)?;

    if !config.is_url() {
        if let Some(parent) = Path::new(&config.target).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    StoreError::unavailable(config.target.clone(), sqlx::Error::Io(e))
                })?;
            }
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| StoreError::unavailable(config.target.clone(), e))?;

    apply_schema(&pool).await?;

    tracing::info!(
        target_db = %config.target,
        max_connections = config.max_connections,
        "inventory store ready"
    );
    Ok(pool)
}

/// Apply the create-if-absent schema. Safe to call repeatedly.
pub async fn apply_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::raw_sql(SCHEMA)
        .execute(pool)
        .await
        .map_err(|source| StoreError::SchemaFailed { source })?;
    Ok(())
}

fn connect_options(config: &StoreConfig) -> Result<SqliteConnectOptions> {
    let options = if config.is_url() {
        SqliteConnectOptions::from_str(&config.target)
            .map_err(|e| StoreError::unavailable(config.target.clone(), e))?
    } else {
        SqliteConnectOptions::new().filename(&config.target)
    };

    Ok(options
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT)
        // Backstop against dangling references; cascading stays explicit.
        .foreign_keys(true))
}
