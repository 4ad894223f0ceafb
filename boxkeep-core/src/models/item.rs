//! Item records

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Item {
    pub id: i64,
    pub container_id: i64,
    pub name: String,
    pub quantity: i64,
    pub added_at: DateTime<Utc>,
}

/// Result of a conditional move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The item belonged to the source container and now belongs to the destination
    Moved,
    /// The item did not belong to the source container; nothing changed
    Unchanged,
}

impl MoveOutcome {
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            Self::Unchanged
        } else {
            Self::Moved
        }
    }

    pub fn is_moved(self) -> bool {
        self == Self::Moved
    }
}
