//! Box search command

use anyhow::Result;
use clap::Parser;

use super::{print_containers, StoreArgs};

/// Arguments for the search command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Text to look for in box names and labels (empty matches all)
    #[arg(default_value = "")]
    pub text: String,

    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run_search(args: SearchArgs) -> Result<()> {
    let store = args.store.open().await?;
    let boxes = store.containers().find_by_text(&args.text).await?;
    store.close().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&boxes)?);
    } else {
        print_containers(&boxes);
        println!("{} match(es)", boxes.len());
    }
    Ok(())
}
