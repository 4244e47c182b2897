//! Command abstractions.

use uuid::Uuid;

/// Trait that all commands implement.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted type name for this command (`rite.submit_first`, `oracle.roll`).
    fn command_type(&self) -> &'static str;

    /// Correlation ID tying the command to its log lines and mirror event.
    fn correlation_id(&self) -> Uuid;
}
