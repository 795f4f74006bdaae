//! Command handlers for the Category Catalog context.

use ledgerly_core::clock::Clock;
use ledgerly_core::dispatch::{EventDispatcher, EventEnvelope};
use ledgerly_core::error::DomainError;
use ledgerly_core::event::EventMetadata;
use uuid::Uuid;

use crate::domain::commands::RecordCategoryDeletion;
use crate::domain::events::{
    CATEGORY_DELETED_EVENT_TYPE, CatalogEvent, CatalogEventKind, DeleteCategoryEvent,
    DeleteCategoryPayload,
};

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct CatalogCommandResult {
    /// The category the command concerned.
    pub category_id: Uuid,
    /// IDs of the events produced and dispatched.
    pub event_ids: Vec<Uuid>,
}

/// Handles the `RecordCategoryDeletion` command: dispatches a
/// `DeleteCategoryEvent` carrying the title mapping exactly as given.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the category ID is nil, or the
/// dispatcher's error if dispatch fails.
pub async fn handle_record_category_deletion(
    command: &RecordCategoryDeletion,
    clock: &dyn Clock,
    dispatcher: &dyn EventDispatcher,
) -> Result<CatalogCommandResult, DomainError> {
    if command.category_id.is_nil() {
        return Err(DomainError::Validation(
            "category_id must not be nil".to_owned(),
        ));
    }

    let event = CatalogEvent {
        metadata: EventMetadata::for_command(CATEGORY_DELETED_EVENT_TYPE, command, clock.now()),
        kind: CatalogEventKind::CategoryDeleted(DeleteCategoryEvent::new(
            DeleteCategoryPayload {
                category_id: command.category_id,
                actor: command.actor.clone(),
                category_title: command.category_title.clone(),
            },
        )),
    };
    let envelope = EventEnvelope::from_event(&event);
    let event_id = envelope.event_id;

    dispatcher.dispatch(envelope).await?;

    tracing::info!(
        event_id = %event_id,
        category_id = %command.category_id,
        actor = %command.actor.user_id,
        correlation_id = %command.correlation_id,
        "category deletion recorded"
    );

    Ok(CatalogCommandResult {
        category_id: command.category_id,
        event_ids: vec![event_id],
    })
}

#[cfg(test)]
mod tests {
    use ledgerly_core::actor::CurrentUser;
    use ledgerly_core::email::EmailTemplate;
    use ledgerly_core::error::DomainError;
    use serde_json::json;
    use uuid::Uuid;

    use crate::application::command_handlers::handle_record_category_deletion;
    use crate::domain::commands::RecordCategoryDeletion;
    use crate::domain::events::{CatalogEventKind, LocalizedText};
    use ledgerly_test_support::{FailingDispatcher, FixedClock, RecordingDispatcher, fixed_now};

    fn command(category_id: Uuid, category_title: Option<LocalizedText>) -> RecordCategoryDeletion {
        RecordCategoryDeletion {
            correlation_id: Uuid::new_v4(),
            category_id,
            actor: CurrentUser {
                user_id: Uuid::new_v4(),
                email: Some("owner@example.com".to_owned()),
                role: Some("admin".to_owned()),
            },
            category_title,
        }
    }

    #[tokio::test]
    async fn test_handle_record_category_deletion_dispatches_category_deleted_event() {
        // Arrange
        let category_id = Uuid::new_v4();
        let title = LocalizedText::from([
            ("en".to_owned(), Some("Rent".to_owned())),
            ("es".to_owned(), None),
        ]);
        let command = command(category_id, Some(title.clone()));
        let clock = FixedClock(fixed_now());
        let dispatcher = RecordingDispatcher::new();

        // Act
        let result = handle_record_category_deletion(&command, &clock, &dispatcher).await;

        // Assert
        let cmd_result = result.unwrap();
        assert_eq!(cmd_result.category_id, category_id);

        let dispatched = dispatcher.dispatched();
        assert_eq!(dispatched.len(), 1);
        let envelope = &dispatched[0];
        assert_eq!(cmd_result.event_ids, vec![envelope.event_id]);
        assert_eq!(envelope.event_type, "catalog.category_deleted");
        assert_eq!(envelope.correlation_id, command.correlation_id);
        assert_eq!(envelope.occurred_at, fixed_now());
        assert_eq!(envelope.email_template, Some(EmailTemplate::CategoryDeleted));

        let kind: CatalogEventKind = serde_json::from_value(envelope.payload.clone()).unwrap();
        let CatalogEventKind::CategoryDeleted(event) = kind;
        assert_eq!(event.payload().category_id, category_id);
        assert_eq!(event.payload().actor, command.actor);
        assert_eq!(event.payload().category_title.as_ref(), Some(&title));
        assert_eq!(
            envelope.payload["CategoryDeleted"]["category_title"],
            json!({ "en": "Rent", "es": null })
        );
    }

    #[tokio::test]
    async fn test_handle_record_category_deletion_without_title_omits_it() {
        let command = command(Uuid::new_v4(), None);
        let clock = FixedClock(fixed_now());
        let dispatcher = RecordingDispatcher::new();

        handle_record_category_deletion(&command, &clock, &dispatcher)
            .await
            .unwrap();

        let payload = &dispatcher.dispatched()[0].payload["CategoryDeleted"];
        assert!(payload.get("category_title").is_none());
    }

    #[tokio::test]
    async fn test_handle_record_category_deletion_rejects_nil_category() {
        let command = command(Uuid::nil(), None);
        let clock = FixedClock(fixed_now());
        let dispatcher = RecordingDispatcher::new();

        let result = handle_record_category_deletion(&command, &clock, &dispatcher).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(dispatcher.dispatched().is_empty());
    }

    #[tokio::test]
    async fn test_handle_record_category_deletion_propagates_dispatch_failure() {
        let command = command(Uuid::new_v4(), None);
        let clock = FixedClock(fixed_now());

        let result = handle_record_category_deletion(&command, &clock, &FailingDispatcher).await;

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
