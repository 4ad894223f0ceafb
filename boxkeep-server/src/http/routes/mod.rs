//! Route modules

pub mod api;
pub mod boxes;
pub mod health;
pub mod items;
