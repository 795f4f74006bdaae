//! Domain layer for the User Engagement context.

pub mod commands;
pub mod events;
pub mod inactivity;
