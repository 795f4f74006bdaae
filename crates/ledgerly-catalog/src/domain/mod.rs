//! Domain layer for the Category Catalog context.

pub mod commands;
pub mod events;
