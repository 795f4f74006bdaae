//! Configuration for the Authentication context.

use chrono::TimeDelta;
use ledgerly_core::config::{ConfigError, env_lookup, parse_or};

const MAGIC_LINK_TTL_MINUTES: &str = "MAGIC_LINK_TTL_MINUTES";
const DEFAULT_MAGIC_LINK_TTL_MINUTES: i64 = 15;
/// One year.
const MAX_MAGIC_LINK_TTL_MINUTES: i64 = 525_600;

/// Authentication settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    /// How long an issued magic link stays redeemable.
    pub magic_link_ttl: TimeDelta,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            magic_link_ttl: TimeDelta::minutes(DEFAULT_MAGIC_LINK_TTL_MINUTES),
        }
    }
}

impl AuthConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if `MAGIC_LINK_TTL_MINUTES` is not a
    /// positive integer of at most one year's worth of minutes.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let minutes: i64 =
            parse_or(&lookup, MAGIC_LINK_TTL_MINUTES, DEFAULT_MAGIC_LINK_TTL_MINUTES)?;
        if !(1..=MAX_MAGIC_LINK_TTL_MINUTES).contains(&minutes) {
            return Err(ConfigError::Invalid {
                key: MAGIC_LINK_TTL_MINUTES,
                reason: format!(
                    "expected between 1 and {MAX_MAGIC_LINK_TTL_MINUTES} minutes, got {minutes}"
                ),
            });
        }
        Ok(Self {
            magic_link_ttl: TimeDelta::minutes(minutes),
        })
    }
}
