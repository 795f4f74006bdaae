//! Configuration for the User Engagement context.

use chrono::TimeDelta;
use ledgerly_core::config::{ConfigError, env_lookup, parse_or};

use crate::domain::inactivity::InactivityPolicy;

const AFTER_HOURS: &str = "SHORT_INACTIVITY_AFTER_HOURS";
const UNTIL_HOURS: &str = "SHORT_INACTIVITY_UNTIL_HOURS";

impl InactivityPolicy {
    /// Reads the policy from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a variable is unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Reads the policy through `lookup`, defaulting to 72 to 168 hours.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if either bound is not an integer
    /// number of hours or the window is empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let after: i64 = parse_or(&lookup, AFTER_HOURS, defaults.after().num_hours())?;
        let until: i64 = parse_or(&lookup, UNTIL_HOURS, defaults.until().num_hours())?;

        let hours = |key: &'static str, value: i64| {
            TimeDelta::try_hours(value).ok_or_else(|| ConfigError::Invalid {
                key,
                reason: format!("{value} hours is out of range"),
            })
        };
        Self::new(hours(AFTER_HOURS, after)?, hours(UNTIL_HOURS, until)?).map_err(|e| {
            ConfigError::Invalid {
                key: UNTIL_HOURS,
                reason: e.to_string(),
            }
        })
    }
}
