//! Email template typing.
//!
//! Rendering and delivery live outside this workspace; events only name the
//! template a notifier should use.

use serde::{Deserialize, Serialize};

/// Notification email templates known to the mailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplate {
    /// Passwordless sign-in link.
    MagicLink,
    /// A category the recipient uses was deleted.
    CategoryDeleted,
    /// Nudge sent after a short period without activity.
    ShortInactivity,
}

impl EmailTemplate {
    /// Stable identifier the mailer resolves to a template file.
    #[must_use]
    pub fn template_id(self) -> &'static str {
        match self {
            Self::MagicLink => "magic_link",
            Self::CategoryDeleted => "category_deleted",
            Self::ShortInactivity => "short_inactivity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_id_matches_serialized_name() {
        for template in [
            EmailTemplate::MagicLink,
            EmailTemplate::CategoryDeleted,
            EmailTemplate::ShortInactivity,
        ] {
            let json = serde_json::to_value(template).unwrap();
            assert_eq!(json, template.template_id());
        }
    }
}
