//! Store initialization command

use anyhow::Result;
use clap::Parser;

use super::StoreArgs;

/// Arguments for the init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// Create the store and schema, report what is there, exit
pub async fn run_init(args: InitArgs) -> Result<()> {
    let target = args.store.store_config().target;
    let store = args.store.open().await?;
    let boxes = store.containers().count().await?;
    store.close().await;

    println!("store ready at {} ({} boxes)", target, boxes);
    Ok(())
}
