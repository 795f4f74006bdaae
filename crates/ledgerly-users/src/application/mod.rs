//! Application layer for the User Engagement context.

pub mod command_handlers;
