//! The authenticated actor behind a command.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The user on whose behalf an action was performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The user identifier.
    pub user_id: Uuid,
    /// The user's email, when the session carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The user's role, when the session carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl CurrentUser {
    /// Creates an actor that carries only a user identifier.
    #[must_use]
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            email: None,
            role: None,
        }
    }
}
