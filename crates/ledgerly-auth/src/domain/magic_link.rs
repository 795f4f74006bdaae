//! Magic-link schemas and the persisted token read model.

use chrono::{DateTime, Utc};
use ledgerly_core::error::DomainError;
use ledgerly_core::rng::TokenRng;
use ledgerly_core::validation::{as_object, required_string};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Acknowledgement returned once a magic link has been issued.
pub const MAGIC_LINK_CREATED_MESSAGE: &str = "Magic link created";

/// Acknowledgement returned once a magic link has been redeemed.
pub const MAGIC_LINK_VERIFIED_MESSAGE: &str = "Magic link verified";

/// Number of random bytes behind each plaintext token.
pub const TOKEN_BYTES: usize = 32;

const MAX_EMAIL_LEN: usize = 254;

/// Body of a passwordless sign-in request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicLinkRequest {
    /// Address the link is sent to.
    pub email: String,
}

/// Response to a successful magic-link request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicLinkCreatedResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}

impl Default for MagicLinkCreatedResponse {
    fn default() -> Self {
        Self {
            message: MAGIC_LINK_CREATED_MESSAGE.to_owned(),
        }
    }
}

/// Response to a successful magic-link verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicLinkVerifiedResponse {
    /// Human-readable acknowledgement.
    pub message: String,
}

impl Default for MagicLinkVerifiedResponse {
    fn default() -> Self {
        Self {
            message: MAGIC_LINK_VERIFIED_MESSAGE.to_owned(),
        }
    }
}

/// Validates an untrusted magic-link request body. The email is trimmed.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the body is not an object, `email`
/// is missing or not a string, or the address is implausible.
pub fn validate_magic_link_request(
    value: &serde_json::Value,
) -> Result<MagicLinkRequest, DomainError> {
    let object = as_object(value, "magic link request")?;
    let email = required_string(object, "email")?.trim().to_owned();
    if !is_plausible_email(&email) {
        return Err(DomainError::Validation(
            "email must be a valid address".to_owned(),
        ));
    }
    Ok(MagicLinkRequest { email })
}

fn is_plausible_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// A persisted magic-link token. Only the hash of the emailed token is
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicLinkToken {
    /// Row identifier.
    pub id: Uuid,
    /// The user the link signs in.
    pub user_id: Uuid,
    /// Address the link was sent to.
    pub email: String,
    /// Hex-encoded SHA-256 of the plaintext token.
    pub token_hash: String,
    /// When the link was issued.
    pub created_at: DateTime<Utc>,
    /// First instant at which the link no longer verifies.
    pub expires_at: DateTime<Utc>,
    /// When the link was redeemed, if it has been.
    pub used_at: Option<DateTime<Utc>>,
}

impl MagicLinkToken {
    /// Whether the link has passed its expiry at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the link has already been redeemed.
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.used_at.is_some()
    }

    /// Checks that the link can still be redeemed at `now`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Unauthorized` if the link was used or expired.
    pub fn ensure_redeemable(&self, now: DateTime<Utc>) -> Result<(), DomainError> {
        if self.is_used() {
            return Err(DomainError::Unauthorized(
                "magic link has already been used".to_owned(),
            ));
        }
        if self.is_expired(now) {
            return Err(DomainError::Unauthorized("magic link has expired".to_owned()));
        }
        Ok(())
    }
}

/// Draws a fresh plaintext token: [`TOKEN_BYTES`] random bytes, hex-encoded.
#[must_use]
pub fn generate_token(rng: &mut dyn TokenRng) -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hex-encoded SHA-256 of `plaintext`, the form tokens are stored and
/// looked up in.
#[must_use]
pub fn hash_token(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone};
    use serde_json::json;

    use super::*;

    fn token(expires_at: DateTime<Utc>, used_at: Option<DateTime<Utc>>) -> MagicLinkToken {
        MagicLinkToken {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            email: "ada@example.com".to_owned(),
            token_hash: hash_token("secret"),
            created_at: expires_at - TimeDelta::minutes(15),
            expires_at,
            used_at,
        }
    }

    #[test]
    fn test_validate_magic_link_request_trims_email() {
        let request =
            validate_magic_link_request(&json!({ "email": "  ada@example.com " })).unwrap();

        assert_eq!(request.email, "ada@example.com");
    }

    #[test]
    fn test_validate_magic_link_request_rejects_bad_addresses() {
        for email in [
            "",
            "ada",
            "@example.com",
            "ada@example",
            "ada@@example.com",
            "a da@x.io",
            "ada@.io",
        ] {
            let result = validate_magic_link_request(&json!({ "email": email }));
            assert!(
                matches!(result, Err(DomainError::Validation(_))),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_magic_link_request_rejects_missing_email() {
        assert!(validate_magic_link_request(&json!({})).is_err());
        assert!(validate_magic_link_request(&json!("ada@example.com")).is_err());
    }

    #[test]
    fn test_responses_carry_fixed_messages() {
        assert_eq!(
            serde_json::to_value(MagicLinkCreatedResponse::default()).unwrap(),
            json!({ "message": "Magic link created" })
        );
        assert_eq!(
            serde_json::to_value(MagicLinkVerifiedResponse::default()).unwrap(),
            json!({ "message": "Magic link verified" })
        );
    }

    #[test]
    fn test_hash_token_is_sha256_hex() {
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_ensure_redeemable_rejects_used_then_expired() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();

        assert!(token(now + TimeDelta::minutes(1), None).ensure_redeemable(now).is_ok());
        assert!(token(now, None).ensure_redeemable(now).is_err());

        let used = token(now + TimeDelta::minutes(1), Some(now));
        match used.ensure_redeemable(now).unwrap_err() {
            DomainError::Unauthorized(msg) => assert_eq!(msg, "magic link has already been used"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }
}
