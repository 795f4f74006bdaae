//! Ledgerly — User Engagement bounded context.
//!
//! Detects users who have gone quiet for a short while and announces them
//! so a notifier can nudge them back.

pub mod application;
pub mod config;
pub mod domain;
