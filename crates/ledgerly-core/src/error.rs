//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed a shape or business-rule check.
    #[error("validation error: {0}")]
    Validation(String),

    /// A credential was unknown, expired or already consumed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A referenced record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
