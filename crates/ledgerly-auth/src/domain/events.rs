//! Domain events for the Authentication context.

use std::fmt;
use std::str::FromStr;

use ledgerly_core::actor::CurrentUser;
use ledgerly_core::error::DomainError;
use ledgerly_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a user proved their identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginMethod {
    /// Email/phone and password.
    Password,
    /// An external identity provider.
    Provider,
    /// Exchange of a refresh token.
    RefreshToken,
    /// Redemption of a magic link.
    MagicLink,
}

impl LoginMethod {
    /// Wire name of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Provider => "provider",
            Self::RefreshToken => "refresh_token",
            Self::MagicLink => "magic_link",
        }
    }
}

impl fmt::Display for LoginMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "password" => Ok(Self::Password),
            "provider" => Ok(Self::Provider),
            "refresh_token" => Ok(Self::RefreshToken),
            "magic_link" => Ok(Self::MagicLink),
            other => Err(DomainError::Validation(format!(
                "unknown login method: {other}"
            ))),
        }
    }
}

/// Payload of [`UserLoginEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLoginPayload {
    /// The user who signed in.
    pub user_id: Uuid,
    /// How they signed in.
    pub method: LoginMethod,
    /// The actor recorded for the sign-in.
    pub actor: CurrentUser,
}

/// Emitted when a user signs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserLoginEvent {
    payload: UserLoginPayload,
}

impl UserLoginEvent {
    /// Wraps a complete payload.
    #[must_use]
    pub fn new(payload: UserLoginPayload) -> Self {
        Self { payload }
    }

    /// The payload the event was built with.
    #[must_use]
    pub fn payload(&self) -> &UserLoginPayload {
        &self.payload
    }
}

/// Event type identifier for [`UserLoginEvent`].
pub const USER_LOGGED_IN_EVENT_TYPE: &str = "auth.user_logged_in";

/// Event payload variants for the Authentication context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthEventKind {
    /// A user has signed in.
    UserLoggedIn(UserLoginEvent),
}

/// Domain event envelope for the Authentication context.
#[derive(Debug, Clone)]
pub struct AuthEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: AuthEventKind,
}

impl DomainEvent for AuthEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            AuthEventKind::UserLoggedIn(_) => USER_LOGGED_IN_EVENT_TYPE,
        }
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("AuthEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(method: LoginMethod) -> UserLoginPayload {
        let user_id = Uuid::new_v4();
        UserLoginPayload {
            user_id,
            method,
            actor: CurrentUser::new(user_id),
        }
    }

    #[test]
    fn test_user_login_event_exposes_payload_unchanged() {
        let payload = payload(LoginMethod::Password);

        let event = UserLoginEvent::new(payload.clone());

        assert_eq!(event.payload(), &payload);
    }

    #[test]
    fn test_magic_link_method_is_retained_in_payload() {
        let event = UserLoginEvent::new(payload(LoginMethod::MagicLink));

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(event.payload().method, LoginMethod::MagicLink);
        assert_eq!(json["method"], "magic_link");
    }

    #[test]
    fn test_login_method_parses_exactly_four_variants() {
        for method in [
            LoginMethod::Password,
            LoginMethod::Provider,
            LoginMethod::RefreshToken,
            LoginMethod::MagicLink,
        ] {
            assert_eq!(method.as_str().parse::<LoginMethod>().unwrap(), method);
            assert_eq!(serde_json::to_value(method).unwrap(), method.as_str());
        }

        assert!("sso".parse::<LoginMethod>().is_err());
        assert!("MagicLink".parse::<LoginMethod>().is_err());
        assert!(serde_json::from_str::<LoginMethod>("\"otp\"").is_err());
    }
}
