//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use boxkeep_server::{run_server, ServerConfig};
use clap::Parser;

use super::StoreArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Address to bind to (default: 0.0.0.0:$PORT, PORT defaults to 8088)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Boxes per page on the listing endpoint
    #[arg(long, env = "BOXKEEP_PAGE_SIZE")]
    pub page_size: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    let store = args.store.open().await?;

    tracing::info!("Starting boxkeep server on {}", config.bind_addr);
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
