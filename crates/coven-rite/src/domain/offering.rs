//! Submission validation for the three sacrifices.

use coven_core::error::DomainError;

/// Longest accepted First/Second Sacrifice, in characters.
pub const MAX_OFFERING_LEN: usize = 2000;

/// Longest accepted consent text, in characters.
pub const MAX_CONSENT_LEN: usize = 50;

/// The consent phrase, in its canonical (trimmed, lower-case) form.
pub const CONSENT_PHRASE: &str = "i surrender";

/// Checks a First or Second Sacrifice text.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the text is blank or longer than
/// [`MAX_OFFERING_LEN`] characters.
pub fn validate_offering_text(field: &str, text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    let len = text.chars().count();
    if len > MAX_OFFERING_LEN {
        return Err(DomainError::Validation(format!(
            "{field} is {len} characters; the altar holds at most {MAX_OFFERING_LEN}"
        )));
    }
    Ok(())
}

/// Checks the Third Sacrifice consent text.
///
/// Only the exact phrase "I surrender" is accepted, ignoring case and
/// surrounding whitespace. Inner spacing and punctuation must match.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the text is longer than
/// [`MAX_CONSENT_LEN`] characters, and `DomainError::InvalidConsentPhrase`
/// for any other mismatch.
pub fn validate_consent(text: &str) -> Result<(), DomainError> {
    if text.chars().count() > MAX_CONSENT_LEN {
        return Err(DomainError::Validation(format!(
            "consent holds at most {MAX_CONSENT_LEN} characters"
        )));
    }
    if text.trim().to_lowercase() == CONSENT_PHRASE {
        Ok(())
    } else {
        Err(DomainError::InvalidConsentPhrase)
    }
}
