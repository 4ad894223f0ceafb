//! Domain models for containers ("boxes") and the items stored in them

pub mod container;
pub mod item;
pub mod pagination;

pub use container::{Container, ContentRow, UNLABELED};
pub use item::{Item, MoveOutcome};
pub use pagination::{Paginated, Pagination, DEFAULT_PER_PAGE};
