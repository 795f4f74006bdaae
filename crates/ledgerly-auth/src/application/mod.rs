//! Application layer for the Authentication context.

pub mod command_handlers;
