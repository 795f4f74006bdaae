//! Application layer for the Category Catalog context.

pub mod command_handlers;
