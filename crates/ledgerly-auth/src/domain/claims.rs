//! Authentication token claims.
//!
//! [`JwtPayload`] is the static shape; [`validate_jwt_payload`] is the
//! runtime check applied to decoded, untrusted claims. Both read their key
//! names from [`JwtPayload::FIELDS`], so adding a claim means touching the
//! struct, the table and the validator together.

use ledgerly_core::actor::CurrentUser;
use ledgerly_core::error::DomainError;
use ledgerly_core::validation::{as_object, optional_string, required_uuid};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token.
///
/// At least one of `email` or `phone` is expected by convention; neither is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwtPayload {
    /// The authenticated user.
    pub user_id: Uuid,
    /// Email address the user signed in with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number the user signed in with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Authorization role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl JwtPayload {
    /// Wire names of every claim, in declaration order.
    pub const FIELDS: [&'static str; 4] = ["userId", "email", "phone", "role"];

    /// Claims for a user with no optional fields.
    #[must_use]
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            email: None,
            phone: None,
            role: None,
        }
    }
}

impl From<&JwtPayload> for CurrentUser {
    fn from(claims: &JwtPayload) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email.clone(),
            role: claims.role.clone(),
        }
    }
}

/// Validates decoded token claims.
///
/// `userId` must be a hyphenated UUID string. The remaining claims may be
/// absent but must be strings when present. Unknown claims (`exp`, `iat`,
/// ...) are ignored.
///
/// # Errors
///
/// Returns `DomainError::Validation` describing the first offending claim.
pub fn validate_jwt_payload(value: &serde_json::Value) -> Result<JwtPayload, DomainError> {
    let [user_id, email, phone, role] = JwtPayload::FIELDS;
    let object = as_object(value, "JWT payload")?;
    Ok(JwtPayload {
        user_id: required_uuid(object, user_id)?,
        email: optional_string(object, email)?,
        phone: optional_string(object, phone)?,
        role: optional_string(object, role)?,
    })
}
