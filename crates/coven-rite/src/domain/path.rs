//! Path classification.
//!
//! A Seeker's Path is divined from the words of the first two sacrifices.
//! Scoring is keyword-based and fully deterministic: the same texts always
//! yield the same Path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three Paths a Seeker can be placed on.
///
/// Declaration order is the tie-break order: when two Paths share the
/// highest score, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Path {
    /// Seal the unseen.
    Witch,
    /// Break the stuck point visibly.
    Fracture,
    /// Ten toes on the ground, four times over.
    #[serde(rename = "Forty Toes")]
    FortyToes,
}

impl Path {
    /// All Paths in tie-break order.
    pub const ALL: [Path; 3] = [Path::Witch, Path::Fracture, Path::FortyToes];

    /// Display name, as shown to the Seeker.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Witch => "Witch",
            Self::Fracture => "Fracture",
            Self::FortyToes => "Forty Toes",
        }
    }

    /// Keywords that pull the corpus toward this Path.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Witch => &WITCH_KEYWORDS,
            Self::Fracture => &FRACTURE_KEYWORDS,
            Self::FortyToes => &FORTY_TOES_KEYWORDS,
        }
    }

    /// Weight of a single keyword occurrence.
    #[must_use]
    pub fn weight(self) -> u32 {
        match self {
            Self::Fracture => 2,
            Self::Witch | Self::FortyToes => 1,
        }
    }

    /// The fixed brief handed to a Seeker placed on this Path.
    #[must_use]
    pub fn brief(self) -> &'static str {
        match self {
            Self::Witch => WITCH_BRIEF,
            Self::Fracture => FRACTURE_BRIEF,
            Self::FortyToes => FORTY_TOES_BRIEF,
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const WITCH_KEYWORDS: [&str; 8] = [
    "ritual",
    "symbol",
    "dream",
    "myth",
    "sigil",
    "intuition",
    "divination",
    "poetry",
];

const FORTY_TOES_KEYWORDS: [&str; 8] = [
    "schedule",
    "budget",
    "rep",
    "sleep",
    "nutrition",
    "practice",
    "mileage",
    "discipline",
];

const FRACTURE_KEYWORDS: [&str; 8] = [
    "stuck",
    "block",
    "fear",
    "comfort",
    "avoid",
    "procrast",
    "perfection",
    "control",
];

const WITCH_BRIEF: &str = "Witch — seal the unseen. Trial: trust pattern over panic. \
Within 48h: perform a 30-minute nightly sigil/journal ritual; extract one omen → one action.";

const FORTY_TOES_BRIEF: &str = "Forty Toes — ten toes on the ground, four times over. \
Trial: discipline under constraint. Within 48h: define a 7-day ladder (3 tasks/day) with \
non-negotiable timeboxes; publish to an accountability mirror.";

const FRACTURE_BRIEF: &str = "Fracture — break the stuck point visibly. Trial: controlled rupture. \
Within 48h: choose one scary micro-ship (≤2h) that exposes you; ship it publicly and log proof.";

/// Closing signature appended to every divined Path.
pub const COVEN_SIGNOFF: &str = "The glitch is the plan.\n\
The fracture is the doorway.\n\
The Witch is the Seal.\n\
The Shield stands.\n\
The Path is the burden they must bear.";

/// Per-Path keyword scores for one corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathScores {
    /// Witch score.
    pub witch: u32,
    /// Fracture score.
    pub fracture: u32,
    /// Forty Toes score.
    pub forty_toes: u32,
}

impl PathScores {
    /// Score of a single Path.
    #[must_use]
    pub fn get(&self, path: Path) -> u32 {
        match path {
            Path::Witch => self.witch,
            Path::Fracture => self.fracture,
            Path::FortyToes => self.forty_toes,
        }
    }

    /// Picks the winning Path.
    ///
    /// All three equal (no keyword at all included) forces Fracture. Otherwise
    /// the strictly highest score wins, ties going to the earlier Path in
    /// [`Path::ALL`].
    #[must_use]
    pub fn winner(&self) -> Path {
        if self.witch == self.fracture && self.fracture == self.forty_toes {
            return Path::Fracture;
        }
        let mut best = Path::ALL[0];
        for path in &Path::ALL[1..] {
            if self.get(*path) > self.get(best) {
                best = *path;
            }
        }
        best
    }
}

/// Scores both texts against every Path's keywords.
///
/// Matching is case-insensitive substring search over the two texts joined
/// by a newline; every non-overlapping occurrence counts.
#[must_use]
pub fn score(first: &str, second: &str) -> PathScores {
    let corpus = format!("{first}\n{second}").to_lowercase();
    let score_for = |path: Path| -> u32 {
        let hits: usize = path
            .keywords()
            .iter()
            .map(|keyword| corpus.matches(keyword).count())
            .sum();
        u32::try_from(hits)
            .unwrap_or(u32::MAX)
            .saturating_mul(path.weight())
    };
    PathScores {
        witch: score_for(Path::Witch),
        fracture: score_for(Path::Fracture),
        forty_toes: score_for(Path::FortyToes),
    }
}

/// Divines the Path for a pair of offerings.
#[must_use]
pub fn classify(first: &str, second: &str) -> Path {
    score(first, second).winner()
}
