//! Event dispatch seam.
//!
//! Command handlers hand every event they produce to an
//! [`EventDispatcher`] exactly once, by value. What happens next (emails,
//! analytics, audit logs) belongs to the dispatcher.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::email::EmailTemplate;
use crate::error::DomainError;
use crate::event::DomainEvent;

/// Dispatch-ready representation of a domain event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Event type name for deserialization routing.
    pub event_type: String,
    /// Serialized event payload.
    pub payload: serde_json::Value,
    /// Correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Causation ID linking to the causing event/command.
    pub causation_id: Uuid,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
    /// Notification template the event drives, if any.
    pub email_template: Option<EmailTemplate>,
}

impl EventEnvelope {
    /// Serializes `event` into an envelope.
    #[must_use]
    pub fn from_event(event: &dyn DomainEvent) -> Self {
        let meta = event.metadata();
        Self {
            event_id: meta.event_id,
            event_type: event.event_type().to_owned(),
            payload: event.to_payload(),
            correlation_id: meta.correlation_id,
            causation_id: meta.causation_id,
            occurred_at: meta.occurred_at,
            email_template: event.email_template(),
        }
    }
}

/// Receives events once the action that produced them has completed.
#[async_trait]
pub trait EventDispatcher: Send + Sync {
    /// Hands one event over to the dispatcher.
    async fn dispatch(&self, envelope: EventEnvelope) -> Result<(), DomainError>;
}

/// Dispatcher that records every event as a structured log line and
/// performs no other side effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDispatcher;

#[async_trait]
impl EventDispatcher for TracingDispatcher {
    async fn dispatch(&self, envelope: EventEnvelope) -> Result<(), DomainError> {
        tracing::info!(
            event_id = %envelope.event_id,
            event_type = %envelope.event_type,
            correlation_id = %envelope.correlation_id,
            causation_id = %envelope.causation_id,
            email_template = envelope.email_template.map(EmailTemplate::template_id),
            payload = %envelope.payload,
            "domain event dispatched"
        );
        Ok(())
    }
}
