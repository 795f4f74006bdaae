//! Commands for the Category Catalog context.

use ledgerly_core::actor::CurrentUser;
use ledgerly_core::command::Command;
use uuid::Uuid;

use super::events::LocalizedText;

/// Command to announce that a category has been deleted. The deletion
/// itself has already been committed by the caller.
#[derive(Debug, Clone)]
pub struct RecordCategoryDeletion {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The deleted category.
    pub category_id: Uuid,
    /// Who deleted it.
    pub actor: CurrentUser,
    /// The category's title at deletion time, if the caller has it.
    pub category_title: Option<LocalizedText>,
}

impl Command for RecordCategoryDeletion {
    fn command_type(&self) -> &'static str {
        "catalog.record_category_deletion"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
