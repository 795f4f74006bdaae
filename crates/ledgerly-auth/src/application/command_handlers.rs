//! Command handlers for the Authentication context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: validate input, consult the token store, build
//! the resulting events and hand them to the dispatcher.

use std::fmt;

use ledgerly_core::actor::CurrentUser;
use ledgerly_core::clock::Clock;
use ledgerly_core::command::Command;
use ledgerly_core::dispatch::{EventDispatcher, EventEnvelope};
use ledgerly_core::email::EmailTemplate;
use ledgerly_core::error::DomainError;
use ledgerly_core::event::EventMetadata;
use ledgerly_core::rng::TokenRng;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::domain::claims::JwtPayload;
use crate::domain::commands::{RecordLogin, RequestMagicLink, VerifyMagicLink};
use crate::domain::events::{
    AuthEvent, AuthEventKind, LoginMethod, USER_LOGGED_IN_EVENT_TYPE, UserLoginEvent,
    UserLoginPayload,
};
use crate::domain::magic_link::{
    MagicLinkCreatedResponse, MagicLinkToken, MagicLinkVerifiedResponse, generate_token,
    hash_token,
};
use crate::domain::token_store::MagicLinkTokenStore;

/// Result of a successfully handled command.
#[derive(Debug)]
pub struct AuthCommandResult {
    /// IDs of the events produced and dispatched.
    pub event_ids: Vec<Uuid>,
}

/// A freshly issued magic link, ready for the mailer.
#[derive(Clone)]
pub struct IssuedMagicLink {
    /// The plaintext token to embed in the link. It is not stored anywhere.
    pub token: String,
    /// The persisted record.
    pub record: MagicLinkToken,
    /// Template the mailer renders the link with.
    pub email_template: EmailTemplate,
    /// Acknowledgement for the requester.
    pub response: MagicLinkCreatedResponse,
}

impl fmt::Debug for IssuedMagicLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuedMagicLink")
            .field("token", &"<redacted>")
            .field("record", &self.record)
            .field("email_template", &self.email_template)
            .field("response", &self.response)
            .finish()
    }
}

/// Outcome of redeeming a magic link.
#[derive(Debug, Clone)]
pub struct VerifiedMagicLink {
    /// Claims for the access token the issuer should sign.
    pub claims: JwtPayload,
    /// ID of the dispatched login event.
    pub event_id: Uuid,
    /// Acknowledgement for the requester.
    pub response: MagicLinkVerifiedResponse,
}

async fn dispatch_login(
    command: &dyn Command,
    payload: UserLoginPayload,
    clock: &dyn Clock,
    dispatcher: &dyn EventDispatcher,
) -> Result<Uuid, DomainError> {
    let method = payload.method;
    let event = AuthEvent {
        metadata: EventMetadata::for_command(USER_LOGGED_IN_EVENT_TYPE, command, clock.now()),
        kind: AuthEventKind::UserLoggedIn(UserLoginEvent::new(payload)),
    };
    let envelope = EventEnvelope::from_event(&event);
    let event_id = envelope.event_id;

    dispatcher.dispatch(envelope).await?;

    tracing::info!(
        event_id = %event_id,
        correlation_id = %command.correlation_id(),
        method = %method,
        "user login recorded"
    );
    Ok(event_id)
}

/// Handles the `RecordLogin` command: dispatches a `UserLoginEvent` for a
/// sign-in the caller has already authenticated.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the user ID is nil, or the
/// dispatcher's error if dispatch fails.
pub async fn handle_record_login(
    command: &RecordLogin,
    clock: &dyn Clock,
    dispatcher: &dyn EventDispatcher,
) -> Result<AuthCommandResult, DomainError> {
    if command.user_id.is_nil() {
        return Err(DomainError::Validation("user_id must not be nil".to_owned()));
    }

    let payload = UserLoginPayload {
        user_id: command.user_id,
        method: command.method,
        actor: command.actor.clone(),
    };
    let event_id = dispatch_login(command, payload, clock, dispatcher).await?;

    Ok(AuthCommandResult {
        event_ids: vec![event_id],
    })
}

/// Handles the `RequestMagicLink` command: draws a token, stores its hash
/// and returns the plaintext for delivery.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the user ID is nil,
/// `DomainError::Infrastructure` if the expiry falls outside the representable
/// time range, or the store's error if persisting the token fails.
pub async fn handle_request_magic_link(
    command: &RequestMagicLink,
    config: &AuthConfig,
    clock: &dyn Clock,
    rng: &mut dyn TokenRng,
    store: &dyn MagicLinkTokenStore,
) -> Result<IssuedMagicLink, DomainError> {
    if command.user_id.is_nil() {
        return Err(DomainError::Validation("user_id must not be nil".to_owned()));
    }

    let now = clock.now();
    let expires_at = now
        .checked_add_signed(config.magic_link_ttl)
        .ok_or_else(|| {
            DomainError::Infrastructure("magic link expiry is out of range".to_owned())
        })?;
    let token = generate_token(rng);
    let record = MagicLinkToken {
        id: Uuid::new_v4(),
        user_id: command.user_id,
        email: command.request.email.clone(),
        token_hash: hash_token(&token),
        created_at: now,
        expires_at,
        used_at: None,
    };

    store.insert(record.clone()).await?;

    tracing::info!(
        token_id = %record.id,
        user_id = %record.user_id,
        correlation_id = %command.correlation_id,
        expires_at = %record.expires_at,
        "magic link issued"
    );

    Ok(IssuedMagicLink {
        token,
        record,
        email_template: EmailTemplate::MagicLink,
        response: MagicLinkCreatedResponse::default(),
    })
}

/// Handles the `VerifyMagicLink` command: redeems the token, dispatches a
/// `UserLoginEvent` with method `magic_link` and returns the claims to
/// sign.
///
/// Redemption is at-most-once: the token is consumed before the login event
/// is dispatched, so a dispatch failure leaves it used and the caller must
/// request a new link.
///
/// # Errors
///
/// Returns `DomainError::Unauthorized` if the token is unknown, already used
/// or expired. Returns the store's or dispatcher's error if either fails.
pub async fn handle_verify_magic_link(
    command: &VerifyMagicLink,
    clock: &dyn Clock,
    store: &dyn MagicLinkTokenStore,
    dispatcher: &dyn EventDispatcher,
) -> Result<VerifiedMagicLink, DomainError> {
    let now = clock.now();
    let Some(record) = store.find_by_hash(&hash_token(&command.token)).await? else {
        tracing::warn!(correlation_id = %command.correlation_id, "unknown magic link presented");
        return Err(DomainError::Unauthorized("magic link is invalid".to_owned()));
    };
    if let Err(err) = record.ensure_redeemable(now) {
        tracing::warn!(
            token_id = %record.id,
            correlation_id = %command.correlation_id,
            error = %err,
            "magic link rejected"
        );
        return Err(err);
    }

    if !store.consume(record.id, now).await? {
        tracing::warn!(
            token_id = %record.id,
            correlation_id = %command.correlation_id,
            "magic link consumed concurrently"
        );
        return Err(DomainError::Unauthorized(
            "magic link has already been used".to_owned(),
        ));
    }

    let claims = JwtPayload {
        user_id: record.user_id,
        email: Some(record.email.clone()),
        phone: None,
        role: None,
    };
    let payload = UserLoginPayload {
        user_id: record.user_id,
        method: LoginMethod::MagicLink,
        actor: CurrentUser::from(&claims),
    };
    let event_id = dispatch_login(command, payload, clock, dispatcher).await?;

    Ok(VerifiedMagicLink {
        claims,
        event_id,
        response: MagicLinkVerifiedResponse::default(),
    })
}
