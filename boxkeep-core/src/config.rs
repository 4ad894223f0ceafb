//! Store configuration - connection target and pool sizing
//!
//! Configuration is loaded from environment variables:
//! - `DB`: SQLite file path or `sqlite:` URL (default: `<temp dir>/boxes.db`)
//! - `BOXKEEP_MAX_CONNECTIONS`: pool size (default: 1, a single shared handle)

use std::path::PathBuf;

/// Default number of pooled connections.
/// One connection keeps the single-writer discipline of the embedded engine.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Filesystem path or `sqlite:` connection string
    pub target: String,
    /// Maximum connections held by the pool
    pub max_connections: u32,
}

impl StoreConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let target = std::env::var("DB")
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(default_target);

        let max_connections = std::env::var("BOXKEEP_MAX_CONNECTIONS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self {
            target,
            max_connections,
        }
    }

    /// Create config with an explicit target (for testing)
    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Override the pool size
    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections.max(1);
        self
    }

    /// True when the target is a URL rather than a bare path
    pub fn is_url(&self) -> bool {
        self.target.starts_with("sqlite:")
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_target() -> String {
    let path: PathBuf = std::env::temp_dir().join("boxes.db");
    path.display().to_string()
}
