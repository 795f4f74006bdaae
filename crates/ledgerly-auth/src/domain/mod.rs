//! Domain layer for the Authentication context.

pub mod claims;
pub mod commands;
pub mod events;
pub mod magic_link;
pub mod token_store;
