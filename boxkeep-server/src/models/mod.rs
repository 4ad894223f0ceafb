//! Request-side models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod quantity;
pub mod validation;

pub use quantity::Quantity;
pub use validation::ValidationError;
