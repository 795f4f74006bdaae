//! Ledgerly — Authentication bounded context.
//!
//! Responsible for token claims, the passwordless magic-link flow and
//! the login events every sign-in method produces.

pub mod application;
pub mod config;
pub mod domain;
