//! Domain events for the Category Catalog context.

use std::collections::BTreeMap;

use ledgerly_core::actor::CurrentUser;
use ledgerly_core::email::EmailTemplate;
use ledgerly_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display text keyed by locale code. A key mapped to `None` means the
/// translation exists as a slot but is empty, which is different from the
/// key being absent.
pub type LocalizedText = BTreeMap<String, Option<String>>;

/// Payload of [`DeleteCategoryEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCategoryPayload {
    /// The deleted category.
    pub category_id: Uuid,
    /// Who deleted it.
    pub actor: CurrentUser,
    /// The category's title at deletion time, for notification rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_title: Option<LocalizedText>,
}

/// Emitted when a category has been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteCategoryEvent {
    payload: DeleteCategoryPayload,
}

impl DeleteCategoryEvent {
    /// Wraps a complete payload.
    #[must_use]
    pub fn new(payload: DeleteCategoryPayload) -> Self {
        Self { payload }
    }

    /// The payload the event was built with.
    #[must_use]
    pub fn payload(&self) -> &DeleteCategoryPayload {
        &self.payload
    }
}

/// Event type identifier for [`DeleteCategoryEvent`].
pub const CATEGORY_DELETED_EVENT_TYPE: &str = "catalog.category_deleted";

/// Event payload variants for the Category Catalog context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEventKind {
    /// A category has been deleted.
    CategoryDeleted(DeleteCategoryEvent),
}

/// Domain event envelope for the Category Catalog context.
#[derive(Debug, Clone)]
pub struct CatalogEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: CatalogEventKind,
}

impl DomainEvent for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            CatalogEventKind::CategoryDeleted(_) => CATEGORY_DELETED_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("CatalogEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }

    fn email_template(&self) -> Option<EmailTemplate> {
        match &self.kind {
            CatalogEventKind::CategoryDeleted(_) => Some(EmailTemplate::CategoryDeleted),
        }
    }
}
