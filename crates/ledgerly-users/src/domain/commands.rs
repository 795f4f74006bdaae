//! Commands for the User Engagement context.

use ledgerly_core::command::Command;
use uuid::Uuid;

use super::events::InactiveUser;
use super::inactivity::UserActivity;

/// Command to announce an already selected batch of briefly inactive users.
#[derive(Debug, Clone)]
pub struct NotifyShortInactivity {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The users to announce. May be empty.
    pub users: Vec<InactiveUser>,
}

impl Command for NotifyShortInactivity {
    fn command_type(&self) -> &'static str {
        "users.notify_short_inactivity"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to select briefly inactive users from activity records and
/// announce them.
#[derive(Debug, Clone)]
pub struct ScanShortInactivity {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Last-seen records to scan.
    pub activities: Vec<UserActivity>,
}

impl Command for ScanShortInactivity {
    fn command_type(&self) -> &'static str {
        "users.scan_short_inactivity"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
