//! Tracing subscriber setup for binaries that embed the domain crates.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Tracing initialisation errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed.
    #[error("tracing subscriber already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Installs a JSON `fmt` subscriber filtered by `RUST_LOG`, or by
/// `default_filter` when `RUST_LOG` is unset or unparsable.
///
/// # Errors
///
/// Returns `TelemetryError::AlreadyInitialised` if a global subscriber is
/// already set.
pub fn init(default_filter: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .json()
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialised(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_second_subscriber() {
        let first = init("info");
        let second = init("debug");

        assert!(first.is_ok());
        assert!(matches!(second, Err(TelemetryError::AlreadyInitialised(_))));
    }
}
