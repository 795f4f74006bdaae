//! Command abstractions.

use uuid::Uuid;

/// Trait that all commands implement.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted command name, e.g. `auth.record_login`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID carried into every event the command produces.
    fn correlation_id(&self) -> Uuid;

    /// The ID of whatever caused this command. Commands issued directly by a
    /// user are their own cause, so this defaults to the correlation ID.
    fn causation_id(&self) -> Uuid {
        self.correlation_id()
    }
}
