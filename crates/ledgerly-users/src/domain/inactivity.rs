//! Short-inactivity selection.

use chrono::{DateTime, TimeDelta, Utc};
use ledgerly_core::error::DomainError;
use uuid::Uuid;

use super::events::InactiveUser;

/// Last-seen record for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActivity {
    /// The user identifier.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Contact address, if any.
    pub email: Option<String>,
    /// When the user was last active.
    pub last_active_at: DateTime<Utc>,
}

/// The window in which a user counts as briefly inactive: silent for at
/// least `after`, but for less than `until`. Users quiet for longer belong
/// to a different campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityPolicy {
    after: TimeDelta,
    until: TimeDelta,
}

impl InactivityPolicy {
    /// Creates a policy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless `0 <= after < until`.
    pub fn new(after: TimeDelta, until: TimeDelta) -> Result<Self, DomainError> {
        if after < TimeDelta::zero() || after >= until {
            return Err(DomainError::Validation(format!(
                "inactivity window must satisfy 0 <= after < until, \
                 got after={after}, until={until}"
            )));
        }
        Ok(Self { after, until })
    }

    /// Minimum silence before a user is selected.
    #[must_use]
    pub fn after(&self) -> TimeDelta {
        self.after
    }

    /// Silence at which a user stops being selected.
    #[must_use]
    pub fn until(&self) -> TimeDelta {
        self.until
    }

    /// Whether a user last active at `last_active_at` falls in the window.
    #[must_use]
    pub fn is_short_inactive(&self, last_active_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let idle = now - last_active_at;
        idle >= self.after && idle < self.until
    }
}

impl Default for InactivityPolicy {
    fn default() -> Self {
        Self {
            after: TimeDelta::hours(72),
            until: TimeDelta::hours(168),
        }
    }
}

/// Picks the users in `activities` that `policy` considers briefly inactive
/// at `now`, keeping input order.
#[must_use]
pub fn find_short_inactive_users(
    activities: &[UserActivity],
    now: DateTime<Utc>,
    policy: &InactivityPolicy,
) -> Vec<InactiveUser> {
    activities
        .iter()
        .filter(|a| policy.is_short_inactive(a.last_active_at, now))
        .map(|a| InactiveUser {
            user_id: a.user_id,
            name: a.name.clone(),
            email: a.email.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};

    use super::*;

    fn activity(name: &str, idle_hours: i64, now: DateTime<Utc>) -> UserActivity {
        UserActivity {
            user_id: Uuid::new_v4(),
            name: name.to_owned(),
            email: None,
            last_active_at: now - TimeDelta::hours(idle_hours),
        }
    }

    #[test]
    fn test_find_short_inactive_users_applies_half_open_window() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let policy = InactivityPolicy::default();
        let activities = vec![
            activity("recent", 71, now),
            activity("edge-after", 72, now),
            activity("middle", 100, now),
            activity("edge-until", 168, now),
            activity("long-gone", 400, now),
        ];

        // Act
        let selected = find_short_inactive_users(&activities, now, &policy);

        // Assert
        let names: Vec<&str> = selected.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["edge-after", "middle"]);
        assert_eq!(selected[0].user_id, activities[1].user_id);
    }

    #[test]
    fn test_find_short_inactive_users_with_no_matches_is_empty() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();

        let policy = InactivityPolicy::default();
        let selected = find_short_inactive_users(&[activity("recent", 1, now)], now, &policy);

        assert!(selected.is_empty());
    }

    #[test]
    fn test_new_rejects_inverted_or_negative_window() {
        assert!(InactivityPolicy::new(TimeDelta::hours(10), TimeDelta::hours(10)).is_err());
        assert!(InactivityPolicy::new(TimeDelta::hours(20), TimeDelta::hours(10)).is_err());
        assert!(InactivityPolicy::new(TimeDelta::hours(-1), TimeDelta::hours(10)).is_err());

        let policy = InactivityPolicy::new(TimeDelta::hours(1), TimeDelta::hours(2)).unwrap();
        assert_eq!(policy.after(), TimeDelta::hours(1));
        assert_eq!(policy.until(), TimeDelta::hours(2));
    }
}
