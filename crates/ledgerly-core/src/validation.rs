//! Runtime shape checks for untrusted JSON.
//!
//! Each schema in the bounded contexts pairs a plain Rust type with a
//! `validate_*` routine built from these helpers. Unknown keys are ignored;
//! optional fields may be absent but must have the declared type when
//! present (`null` is rejected).

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::DomainError;

/// A JSON object under validation.
pub type Object = Map<String, Value>;

/// Borrows `value` as an object or fails naming `schema`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `value` is not a JSON object.
pub fn as_object<'a>(value: &'a Value, schema: &str) -> Result<&'a Object, DomainError> {
    value
        .as_object()
        .ok_or_else(|| DomainError::Validation(format!("{schema} must be a JSON object")))
}

/// Reads a required string field.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the field is missing or not a string.
pub fn required_string(object: &Object, field: &str) -> Result<String, DomainError> {
    optional_string(object, field)?
        .ok_or_else(|| DomainError::Validation(format!("{field} is required")))
}

/// Reads an optional string field.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the field is present but not a string.
pub fn optional_string(object: &Object, field: &str) -> Result<Option<String>, DomainError> {
    match object.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(DomainError::Validation(format!("{field} must be a string"))),
    }
}

/// Reads a required string field in hyphenated UUID format.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the field is missing, not a string,
/// or not a valid UUID.
pub fn required_uuid(object: &Object, field: &str) -> Result<Uuid, DomainError> {
    let raw = required_string(object, field)?;
    match Uuid::try_parse(&raw) {
        // 36 chars is the hyphenated form; braced, URN and simple forms are refused.
        Ok(id) if raw.len() == 36 => Ok(id),
        _ => Err(DomainError::Validation(format!("{field} must be a UUID"))),
    }
}
