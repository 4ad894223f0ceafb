//! boxkeep CLI - storage box inventory
//!
//! - `serve`: run the JSON API over the inventory store
//! - `init`: create the store and schema, then exit
//! - `list`: page through boxes, newest first
//! - `search`: find boxes by name or label

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "boxkeep",
    author,
    version,
    about = "Track storage boxes and the items inside them"
)]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP JSON API
    Serve(commands::serve::ServeArgs),
    /// Create the store file and schema if missing
    Init(commands::init::InitArgs),
    /// List boxes, newest first
    List(commands::list::ListArgs),
    /// Search boxes by name or label substring
    Search(commands::search::SearchArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Init(args) => commands::run_init(args).await?,
        Commands::List(args) => commands::run_list(args).await?,
        Commands::Search(args) => commands::run_search(args).await?,
    }
    Ok(())
}
