//! boxkeep-server: JSON API over the inventory store
//!
//! Thin glue: request parsing and validation, status mapping, and nothing
//! else. All state lives behind `boxkeep_core::InventoryStore`.

pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
