//! boxkeep-core: inventory storage engine
//!
//! Tracks storage containers ("boxes") and the items inside them on top of
//! SQLite. Three responsibilities compose linearly:
//!
//! - schema manager (`db::schema`): opens the store, create-if-absent schema
//! - queries: count, paginated listing, substring search, contents join
//! - mutations: container/item CRUD and moves, multi-step ones in transactions
//!
//! Glue code (HTTP, CLI) opens an [`InventoryStore`] once and calls into its
//! repositories per request.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use models::{Container, ContentRow, Item, MoveOutcome, Paginated, Pagination};
pub use store::InventoryStore;
