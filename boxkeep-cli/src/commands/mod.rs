//! Subcommand implementations

pub mod init;
pub mod list;
pub mod search;
pub mod serve;

pub use init::run_init;
pub use list::run_list;
pub use search::run_search;
pub use serve::run_serve;

use anyhow::{Context, Result};
use boxkeep_core::{Container, InventoryStore, StoreConfig};
use clap::Args;

/// Store location flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// SQLite file path or sqlite: URL (default: <temp dir>/boxes.db)
    #[arg(long, env = "DB")]
    pub db: Option<String>,

    /// Pooled connections to the store (default: 1)
    #[arg(long, env = "BOXKEEP_MAX_CONNECTIONS")]
    pub max_connections: Option<u32>,
}

impl StoreArgs {
    pub fn store_config(&self) -> StoreConfig {
        let mut config = StoreConfig::from_env();
        if let Some(db) = self.db.as_ref().filter(|db| !db.is_empty()) {
            config.target = db.clone();
        }
        if let Some(max) = self.max_connections {
            config = config.max_connections(max);
        }
        config
    }

    /// Open the store; failure here is fatal for the process.
    pub async fn open(&self) -> Result<InventoryStore> {
        let config = self.store_config();
        InventoryStore::open(&config)
            .await
            .with_context(|| format!("Failed to open inventory store at {}", config.target))
    }
}

/// One line per box: id, name, label, creation date
fn print_containers(containers: &[Container]) {
    for c in containers {
        println!(
            "{:>5}  {:<24}  {:<16}  {}",
            c.id,
            c.name,
            c.display_label(),
            c.created_at.format("%Y/%m/%d")
        );
    }
}
