//! Command handlers for the oracle context.
//!
//! Handlers that need randomness take the shared RNG behind a `Mutex` and
//! hold the lock only for the draw itself.

use std::sync::Mutex;

use coven_core::command::Command;
use coven_core::error::DomainError;
use coven_core::rng::DeterministicRng;
use serde::Serialize;
use tracing::info;

use crate::domain::commands::{CarveSigil, DrawOmen, EchoWords, FlipCoin, RollDie};
use crate::domain::oracle::{CoinSide, MAX_DIE_SIDES, MAX_ECHO_LEN, OMENS, carve_sigil, shorten};

/// Outcome of a die roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DieRoll {
    /// Number of faces rolled.
    pub sides: u32,
    /// The face that came up, in `[1, sides]`.
    pub roll: u32,
    /// Reply text.
    pub message: String,
}

/// Outcome of a coin flip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinFlip {
    /// The face that came up.
    pub side: CoinSide,
    /// Reply text.
    pub message: String,
}

/// A carved sigil.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sigil {
    /// The sigil letters.
    pub sigil: String,
    /// Reply text.
    pub message: String,
}

fn draw(
    rng: &Mutex<dyn DeterministicRng + Send>,
    min: u32,
    max: u32,
) -> Result<u32, DomainError> {
    let mut guard = rng
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
    Ok(guard.next_u32_range(min, max))
}

/// Handles `RollDie`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `sides` is outside `[2, 1000]`, or
/// `DomainError::Infrastructure` if the RNG lock is poisoned.
pub fn handle_roll_die(
    command: &RollDie,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<DieRoll, DomainError> {
    if !(2..=MAX_DIE_SIDES).contains(&command.sides) {
        return Err(DomainError::Validation(format!(
            "a die needs between 2 and {MAX_DIE_SIDES} sides, got {}",
            command.sides
        )));
    }

    let roll = draw(rng, 1, command.sides)?;
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        sides = command.sides,
        roll,
        "die rolled"
    );

    Ok(DieRoll {
        sides: command.sides,
        roll,
        message: format!("d{}: **{roll}**", command.sides),
    })
}

/// Handles `FlipCoin`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the RNG lock is poisoned.
pub fn handle_flip_coin(
    command: &FlipCoin,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<CoinFlip, DomainError> {
    let side = CoinSide::from_draw(draw(rng, 0, 1)?);
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        %side,
        "coin flipped"
    );

    Ok(CoinFlip {
        side,
        message: format!("The coin speaks: **{side}**"),
    })
}

/// Handles `DrawOmen`.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the RNG lock is poisoned.
pub fn handle_draw_omen(
    command: &DrawOmen,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<&'static str, DomainError> {
    let last = u32::try_from(OMENS.len() - 1).unwrap_or(0);
    let index = draw(rng, 0, last)?;
    // Out-of-range draws from a scripted RNG fall back to the last omen.
    let omen = usize::try_from(index)
        .ok()
        .and_then(|i| OMENS.get(i).copied())
        .unwrap_or(OMENS[OMENS.len() - 1]);
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        "omen drawn"
    );
    Ok(omen)
}

/// Handles `CarveSigil`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the phrase holds no letters.
pub fn handle_carve_sigil(command: &CarveSigil) -> Result<Sigil, DomainError> {
    let sigil = carve_sigil(&command.phrase);
    if sigil.is_empty() {
        return Err(DomainError::Validation(
            "the phrase holds no letters to carve".to_owned(),
        ));
    }
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        "sigil carved"
    );

    Ok(Sigil {
        message: format!("Sigil: `{sigil}` → carve it, carry it, ship it."),
        sigil,
    })
}

/// Handles `EchoWords`: returns the words in Coven cadence, shortened to
/// fit a chat message.
#[must_use]
pub fn handle_echo_words(command: &EchoWords) -> String {
    info!(
        command = command.command_type(),
        correlation_id = %command.correlation_id(),
        "words echoed"
    );
    shorten(&format!("Seeker— {}", command.text), MAX_ECHO_LEN)
}
