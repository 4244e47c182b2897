//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// No variant leaves a session partially mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A submission failed shape validation (blank, too long).
    #[error("validation error: {0}")]
    Validation(String),

    /// The Third Sacrifice text was not the exact consent phrase.
    ///
    /// Displayed verbatim to the Seeker.
    #[error("The altar rejects half-measures. Type exactly: **I surrender**")]
    InvalidConsentPhrase,

    /// A path was requested before all three offerings were given.
    ///
    /// Displayed verbatim to the Seeker.
    #[error("Three keys or no door. Use `/first`, `/second`, `/third` first.")]
    PrerequisitesNotMet,

    /// Shared infrastructure failed (e.g. a poisoned RNG lock).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
