//! Box listing command

use anyhow::Result;
use boxkeep_core::models::DEFAULT_PER_PAGE;
use boxkeep_core::{Paginated, Pagination};
use clap::Parser;

use super::{print_containers, StoreArgs};

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Page number (1-indexed; lower values show the first page)
    #[arg(long, short = 'p', default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Boxes per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run_list(args: ListArgs) -> Result<()> {
    let store = args.store.open().await?;
    let page = Pagination::from_signed(args.page, args.per_page);

    let total = store.containers().count().await?;
    let boxes = store.containers().list(page.offset(), page.limit()).await?;
    let result = Paginated::new(boxes, total, page);
    store.close().await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_containers(&result.items);
        println!("page {} of {} ({} boxes)", result.page, result.total_pages(), result.total);
    }
    Ok(())
}
