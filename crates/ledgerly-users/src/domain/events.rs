//! Domain events for the User Engagement context.

use ledgerly_core::email::EmailTemplate;
use ledgerly_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user selected for a short-inactivity notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactiveUser {
    /// The user identifier. Never nil.
    pub user_id: Uuid,
    /// Display name for the greeting.
    pub name: String,
    /// Where to send the nudge; `None` for users without an address.
    pub email: Option<String>,
}

/// Payload of [`UsersShortInactivityEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersShortInactivityPayload {
    /// Selected users, in selection order. May be empty.
    pub users: Vec<InactiveUser>,
}

/// Emitted when a batch of users has been found briefly inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsersShortInactivityEvent {
    payload: UsersShortInactivityPayload,
}

impl UsersShortInactivityEvent {
    /// Wraps a complete payload.
    #[must_use]
    pub fn new(payload: UsersShortInactivityPayload) -> Self {
        Self { payload }
    }

    /// The payload the event was built with.
    #[must_use]
    pub fn payload(&self) -> &UsersShortInactivityPayload {
        &self.payload
    }
}

/// Event type identifier for [`UsersShortInactivityEvent`].
pub const SHORT_INACTIVITY_DETECTED_EVENT_TYPE: &str = "users.short_inactivity_detected";

/// Event payload variants for the User Engagement context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsersEventKind {
    /// Users have been found briefly inactive.
    ShortInactivityDetected(UsersShortInactivityEvent),
}

/// Domain event envelope for the User Engagement context.
#[derive(Debug, Clone)]
pub struct UsersEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: UsersEventKind,
}

impl DomainEvent for UsersEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            UsersEventKind::ShortInactivityDetected(_) => SHORT_INACTIVITY_DETECTED_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("UsersEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }

    fn email_template(&self) -> Option<EmailTemplate> {
        match &self.kind {
            UsersEventKind::ShortInactivityDetected(_) => Some(EmailTemplate::ShortInactivity),
        }
    }
}
