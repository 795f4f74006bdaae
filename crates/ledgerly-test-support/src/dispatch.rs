//! Test dispatchers — mock `EventDispatcher` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use ledgerly_core::dispatch::{EventDispatcher, EventEnvelope};
use ledgerly_core::error::DomainError;

/// A dispatcher that records every envelope it receives and always
/// succeeds.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    dispatched: Mutex<Vec<EventEnvelope>>,
}

impl RecordingDispatcher {
    /// Create an empty recording dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all dispatched envelopes, in dispatch order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn dispatched(&self) -> Vec<EventEnvelope> {
        self.dispatched.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventDispatcher for RecordingDispatcher {
    async fn dispatch(&self, envelope: EventEnvelope) -> Result<(), DomainError> {
        self.dispatched.lock().unwrap().push(envelope);
        Ok(())
    }
}

/// A dispatcher that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingDispatcher;

#[async_trait]
impl EventDispatcher for FailingDispatcher {
    async fn dispatch(&self, _envelope: EventEnvelope) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("broker unavailable".into()))
    }
}
