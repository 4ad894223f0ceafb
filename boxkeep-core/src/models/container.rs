//! Container records and the container-contents join row

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::Item;

/// Placeholder shown for a container without a usable label
pub const UNLABELED: &str = "unlabeled";

/// Container record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Container {
    pub id: i64,
    pub name: String,
    /// `None` is stored as SQL NULL and is distinct from `Some("")`
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Container {
    /// Label for display; missing and empty labels both read as "unlabeled".
    pub fn display_label(&self) -> &str {
        display_label(self.label.as_deref())
    }
}

/// One row of a container's contents: the owning container's metadata plus
/// at most one item. An empty container yields a single row with `item: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentRow {
    pub container_id: i64,
    pub container_name: String,
    pub container_label: Option<String>,
    pub item: Option<Item>,
}

impl ContentRow {
    pub fn display_label(&self) -> &str {
        display_label(self.container_label.as_deref())
    }
}

fn display_label(label: Option<&str>) -> &str {
    match label {
        Some(label) if !label.is_empty() => label,
        _ => UNLABELED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(label: Option<&str>) -> Container {
        Container {
            id: 1,
            name: "Garage".into(),
            label: label.map(str::to_owned),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn missing_label_displays_placeholder() {
        let c = container(None);
        assert_eq!(c.display_label(), "unlabeled");
        assert_eq!(c.label, None);
    }

    #[test]
    fn empty_label_displays_placeholder_but_stays_empty() {
        let c = container(Some(""));
        assert_eq!(c.display_label(), "unlabeled");
        assert_eq!(c.label.as_deref(), Some(""));
    }

    #[test]
    fn real_label_passes_through() {
        assert_eq!(container(Some("A1")).display_label(), "A1");
    }

    #[test]
    fn label_serializes_as_null_when_missing() {
        let json = serde_json::to_value(container(None)).unwrap();
        assert!(json["label"].is_null());
    }
}
