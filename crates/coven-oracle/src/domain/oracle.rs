//! Oracle lore: coin faces, omens, sigil carving and echo shortening.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Faces of fate's coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoinSide {
    /// Heads.
    Heads,
    /// Tails.
    Tails,
}

impl CoinSide {
    /// Maps an RNG draw in `[0, 1]` to a face.
    #[must_use]
    pub fn from_draw(draw: u32) -> Self {
        if draw == 0 { Self::Heads } else { Self::Tails }
    }
}

impl fmt::Display for CoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => f.write_str("Heads"),
            Self::Tails => f.write_str("Tails"),
        }
    }
}

/// One-line omens to set the day.
pub const OMENS: [&str; 5] = [
    "Break one rule you wrote for yourself.",
    "Small ship. Public proof.",
    "Ask for a no; harvest the yes.",
    "Do it badly once; repeat better.",
    "Ritual before tactic.",
];

/// Default face count of the omen die.
pub const DEFAULT_DIE_SIDES: u32 = 20;

/// Largest die the oracle will roll.
pub const MAX_DIE_SIDES: u32 = 1000;

/// Longest echo handed back to the chat platform.
pub const MAX_ECHO_LEN: usize = 1900;

const ECHO_PLACEHOLDER: &str = " [...]";

/// Carves a sigil: upper-cases the phrase, keeps only letters, and drops
/// every letter already seen.
#[must_use]
pub fn carve_sigil(phrase: &str) -> String {
    let mut seen = HashSet::new();
    phrase
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_alphabetic())
        .filter(|c| seen.insert(*c))
        .collect()
}

/// Collapses whitespace and, if the result exceeds `width` characters,
/// drops trailing words until it fits with a `" [...]"` marker.
///
/// A single word too long to fit is cut mid-word.
#[must_use]
pub fn shorten(text: &str, width: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let collapsed = words.join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(ECHO_PLACEHOLDER.chars().count());
    let mut out = String::new();
    let mut used = 0;
    for word in &words {
        let sep = usize::from(!out.is_empty());
        let len = word.chars().count();
        if used + sep + len > budget {
            break;
        }
        if sep == 1 {
            out.push(' ');
        }
        out.push_str(word);
        used += sep + len;
    }

    if out.is_empty() {
        let cut: String = collapsed.chars().take(budget).collect();
        return format!("{cut}{ECHO_PLACEHOLDER}");
    }
    out.push_str(ECHO_PLACEHOLDER);
    out
}
