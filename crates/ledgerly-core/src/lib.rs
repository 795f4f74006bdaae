//! Ledgerly Core — shared domain abstractions.
//!
//! This crate defines the value types, traits and seams that all bounded
//! contexts depend on. It contains no infrastructure code beyond the
//! tracing subscriber setup.

pub mod actor;
pub mod clock;
pub mod command;
pub mod config;
pub mod currency;
pub mod dispatch;
pub mod email;
pub mod error;
pub mod event;
pub mod rng;
pub mod telemetry;
pub mod validation;
