//! Database layer - schema manager and repositories
//!
//! # Design Principles
//!
//! - One explicitly constructed pool, no process-wide global handle
//! - Reads are single statements; "no rows" is an empty result, not an error
//! - Zero rows affected on a targeted write is `NotFound`, detected without a pre-check
//! - Transactions for every multi-step mutation; dropping an uncommitted
//!   transaction rolls it back

pub mod repos;
pub mod schema;

pub use repos::*;
pub use schema::{apply_schema, initialize};
