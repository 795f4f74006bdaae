//! Commands for the Authentication context.

use std::fmt;

use ledgerly_core::actor::CurrentUser;
use ledgerly_core::command::Command;
use uuid::Uuid;

use super::events::LoginMethod;
use super::magic_link::MagicLinkRequest;

/// Command to record a completed sign-in.
#[derive(Debug, Clone)]
pub struct RecordLogin {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The user who signed in.
    pub user_id: Uuid,
    /// How they signed in.
    pub method: LoginMethod,
    /// The actor to record.
    pub actor: CurrentUser,
}

impl Command for RecordLogin {
    fn command_type(&self) -> &'static str {
        "auth.record_login"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to issue a magic link for a user the caller has already
/// resolved from the requested email.
#[derive(Debug, Clone)]
pub struct RequestMagicLink {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The user the link signs in.
    pub user_id: Uuid,
    /// The validated request body.
    pub request: MagicLinkRequest,
}

impl Command for RequestMagicLink {
    fn command_type(&self) -> &'static str {
        "auth.request_magic_link"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to redeem a magic link.
#[derive(Clone)]
pub struct VerifyMagicLink {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The plaintext token from the link.
    pub token: String,
}

impl fmt::Debug for VerifyMagicLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyMagicLink")
            .field("correlation_id", &self.correlation_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Command for VerifyMagicLink {
    fn command_type(&self) -> &'static str {
        "auth.verify_magic_link"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
