//! Command handlers for the rite context.
//!
//! Each handler validates its command, mutates the session store, and for
//! accepted offerings hands a copy to the mirror dispatcher.

use coven_core::command::Command;
use coven_core::error::DomainError;
use coven_core::mirror::OfferingKind;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::mirror::MirrorDispatcher;
use crate::application::query_handlers::SessionStatus;
use crate::domain::commands::{
    ResetSession, ResolvePath, SubmitFirstOffering, SubmitSecondOffering, SubmitSurrender,
};
use crate::domain::offering::{validate_consent, validate_offering_text};
use crate::domain::path::{COVEN_SIGNOFF, Path, PathScores, score};
use crate::store::SessionStore;

/// Longest divination message handed back to the chat platform.
pub const MAX_MESSAGE_LEN: usize = 1900;

/// Result of an accepted offering.
#[derive(Debug)]
pub struct SubmissionReceipt {
    /// Session progress after the offering.
    pub status: SessionStatus,
    /// Background mirror delivery, when a sink is configured.
    pub mirror: Option<JoinHandle<()>>,
}

/// A divined Path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResolution {
    /// The chosen Path.
    pub path: Path,
    /// The Path's fixed brief.
    pub brief: &'static str,
    /// Keyword scores the choice was made from.
    pub scores: PathScores,
    /// Full reply: heading, brief and signoff, capped at [`MAX_MESSAGE_LEN`].
    pub message: String,
}

/// Handles `SubmitFirstOffering`: records the First Sacrifice.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the text is blank or too long.
pub fn handle_submit_first(
    command: &SubmitFirstOffering,
    store: &SessionStore,
    mirror: &MirrorDispatcher,
) -> Result<SubmissionReceipt, DomainError> {
    validate_offering_text("first", &command.text)?;

    let session = store.record_first(&command.user_key, &command.text);
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        "first sacrifice received"
    );

    let mirror = mirror.dispatch(
        command.correlation_id,
        &command.user_key,
        command.display_name.as_deref(),
        OfferingKind::First,
        serde_json::json!({ "first": command.text }),
    );

    Ok(SubmissionReceipt {
        status: SessionStatus::from_session(Some(&session)),
        mirror,
    })
}

/// Handles `SubmitSecondOffering`: records the Second Sacrifice.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the text is blank or too long.
pub fn handle_submit_second(
    command: &SubmitSecondOffering,
    store: &SessionStore,
    mirror: &MirrorDispatcher,
) -> Result<SubmissionReceipt, DomainError> {
    validate_offering_text("second", &command.text)?;

    let session = store.record_second(&command.user_key, &command.text);
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        "second sacrifice received"
    );

    let mirror = mirror.dispatch(
        command.correlation_id,
        &command.user_key,
        command.display_name.as_deref(),
        OfferingKind::Second,
        serde_json::json!({ "second": command.text }),
    );

    Ok(SubmissionReceipt {
        status: SessionStatus::from_session(Some(&session)),
        mirror,
    })
}

/// Handles `SubmitSurrender`: records the Third Sacrifice once the consent
/// phrase checks out.
///
/// # Errors
///
/// Returns `DomainError::InvalidConsentPhrase` if the text is not exactly
/// "I surrender" (ignoring case and surrounding whitespace), or
/// `DomainError::Validation` if it is too long. The session is untouched in
/// both cases.
pub fn handle_submit_surrender(
    command: &SubmitSurrender,
    store: &SessionStore,
    mirror: &MirrorDispatcher,
) -> Result<SubmissionReceipt, DomainError> {
    if let Err(e) = validate_consent(&command.consent) {
        debug!(correlation_id = %command.correlation_id, "consent rejected");
        return Err(e);
    }

    let session = store.record_surrender(&command.user_key);
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        "third sacrifice received"
    );

    let mirror = mirror.dispatch(
        command.correlation_id,
        &command.user_key,
        command.display_name.as_deref(),
        OfferingKind::Third,
        serde_json::json!({ "surrender": true }),
    );

    Ok(SubmissionReceipt {
        status: SessionStatus::from_session(Some(&session)),
        mirror,
    })
}

/// Handles `ResolvePath`: divines the Path from the first two sacrifices
/// and records it on the session.
///
/// Re-running on unchanged offerings yields the same Path.
///
/// # Errors
///
/// Returns `DomainError::PrerequisitesNotMet` unless the first, second and
/// third sacrifices are all present. `chosen_path` is left untouched.
pub fn handle_resolve_path(
    command: &ResolvePath,
    store: &SessionStore,
) -> Result<PathResolution, DomainError> {
    let session = store
        .get(&command.user_key)
        .ok_or(DomainError::PrerequisitesNotMet)?;
    let (first, second) = session
        .completed_offerings()
        .ok_or(DomainError::PrerequisitesNotMet)?;

    let scores = score(first, second);
    let path = scores.winner();
    store.set_chosen_path(&command.user_key, path);

    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        path = %path,
        witch = scores.witch,
        fracture = scores.fracture,
        forty_toes = scores.forty_toes,
        "path divined"
    );

    Ok(PathResolution {
        path,
        brief: path.brief(),
        scores,
        message: render_path_message(path),
    })
}

/// Handles `ResetSession`: scatters the Seeker's offerings.
///
/// Returns whether a session existed. Unknown users are a no-op.
pub fn handle_reset_session(command: &ResetSession, store: &SessionStore) -> bool {
    let removed = store.reset(&command.user_key);
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        removed,
        "session reset"
    );
    removed
}

/// Builds the reply for a divined Path.
#[must_use]
pub fn render_path_message(path: Path) -> String {
    truncate_message(
        &format!("**Chosen Path: {path}**\n{}\n\n{COVEN_SIGNOFF}", path.brief()),
        MAX_MESSAGE_LEN,
    )
}

/// Caps `text` at `limit` characters, ending cut text with "...".
#[must_use]
pub fn truncate_message(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(limit.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
