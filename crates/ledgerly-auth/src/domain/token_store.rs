//! Storage seam for magic-link tokens.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ledgerly_core::error::DomainError;
use uuid::Uuid;

use super::magic_link::MagicLinkToken;

/// Persistence for issued magic-link tokens. Implementations live with the
/// storage layer.
#[async_trait]
pub trait MagicLinkTokenStore: Send + Sync {
    /// Persists a newly issued token.
    async fn insert(&self, token: MagicLinkToken) -> Result<(), DomainError>;

    /// Looks a token up by the hash of its plaintext.
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<MagicLinkToken>, DomainError>;

    /// Atomically redeems a token: sets `used_at` only if it is still unset.
    ///
    /// Returns `false` when the token was already redeemed, so concurrent
    /// verifications of one token succeed at most once.
    async fn consume(&self, token_id: Uuid, used_at: DateTime<Utc>) -> Result<bool, DomainError>;
}
