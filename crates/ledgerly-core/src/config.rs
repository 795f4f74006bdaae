//! Environment-variable configuration helpers.
//!
//! Config types expose `from_env()` for production and `from_lookup()` so
//! tests can supply values without touching the process environment.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that could not be used.
    #[error("{key} is invalid: {reason}")]
    Invalid {
        /// The offending variable.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Reads a variable from the process environment.
#[must_use]
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parses `key` from `lookup`, using `default` when it is unset.
///
/// # Errors
///
/// Returns `ConfigError::Invalid` if the value is set but does not parse.
pub fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: format!("{e}"),
        }),
    }
}
