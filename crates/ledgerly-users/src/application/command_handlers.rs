//! Command handlers for the User Engagement context.

use ledgerly_core::clock::Clock;
use ledgerly_core::command::Command;
use ledgerly_core::dispatch::{EventDispatcher, EventEnvelope};
use ledgerly_core::error::DomainError;
use ledgerly_core::event::EventMetadata;
use uuid::Uuid;

use crate::domain::commands::{NotifyShortInactivity, ScanShortInactivity};
use crate::domain::events::{
    InactiveUser, SHORT_INACTIVITY_DETECTED_EVENT_TYPE, UsersEvent, UsersEventKind,
    UsersShortInactivityEvent, UsersShortInactivityPayload,
};
use crate::domain::inactivity::{InactivityPolicy, find_short_inactive_users};

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct UsersCommandResult {
    /// How many users the dispatched event names.
    pub user_count: usize,
    /// IDs of the events produced and dispatched.
    pub event_ids: Vec<Uuid>,
}

async fn dispatch_short_inactivity(
    command: &dyn Command,
    users: Vec<InactiveUser>,
    clock: &dyn Clock,
    dispatcher: &dyn EventDispatcher,
) -> Result<UsersCommandResult, DomainError> {
    if let Some(position) = users.iter().position(|u| u.user_id.is_nil()) {
        return Err(DomainError::Validation(format!(
            "users[{position}].user_id must not be nil"
        )));
    }

    let user_count = users.len();
    let event = UsersEvent {
        metadata: EventMetadata::for_command(
            SHORT_INACTIVITY_DETECTED_EVENT_TYPE,
            command,
            clock.now(),
        ),
        kind: UsersEventKind::ShortInactivityDetected(UsersShortInactivityEvent::new(
            UsersShortInactivityPayload { users },
        )),
    };
    let envelope = EventEnvelope::from_event(&event);
    let event_id = envelope.event_id;

    dispatcher.dispatch(envelope).await?;

    tracing::info!(
        event_id = %event_id,
        correlation_id = %command.correlation_id(),
        user_count,
        "short inactivity announced"
    );

    Ok(UsersCommandResult {
        user_count,
        event_ids: vec![event_id],
    })
}

/// Handles the `NotifyShortInactivity` command: dispatches a
/// `UsersShortInactivityEvent` for the given users, even when there are
/// none.
///
/// # Errors
///
/// Returns `DomainError::Validation` if any user ID is nil, or the
/// dispatcher's error if dispatch fails.
pub async fn handle_notify_short_inactivity(
    command: &NotifyShortInactivity,
    clock: &dyn Clock,
    dispatcher: &dyn EventDispatcher,
) -> Result<UsersCommandResult, DomainError> {
    dispatch_short_inactivity(command, command.users.clone(), clock, dispatcher).await
}

/// Handles the `ScanShortInactivity` command: selects the users `policy`
/// considers briefly inactive and announces them.
///
/// # Errors
///
/// Returns `DomainError::Validation` if a selected user ID is nil, or the
/// dispatcher's error if dispatch fails.
pub async fn handle_scan_short_inactivity(
    command: &ScanShortInactivity,
    policy: &InactivityPolicy,
    clock: &dyn Clock,
    dispatcher: &dyn EventDispatcher,
) -> Result<UsersCommandResult, DomainError> {
    let users = find_short_inactive_users(&command.activities, clock.now(), policy);
    tracing::debug!(
        scanned = command.activities.len(),
        selected = users.len(),
        "short inactivity scan complete"
    );
    dispatch_short_inactivity(command, users, clock, dispatcher).await
}
