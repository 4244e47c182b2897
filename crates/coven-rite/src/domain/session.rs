//! The per-user session record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::path::Path;

/// Accumulated rite progress for one user.
///
/// Only [`crate::store::SessionStore`] creates sessions, and only while
/// recording a submission, so a stored session always has at least one
/// step filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// When the first submission arrived. Never updated.
    pub created_at: DateTime<Utc>,
    /// First Sacrifice — the First Quest.
    pub first_text: Option<String>,
    /// Second Sacrifice — the Human Project.
    pub second_text: Option<String>,
    /// Third Sacrifice — the choice has been surrendered.
    pub surrendered: bool,
    /// The divined Path, once `/path` has run.
    pub chosen_path: Option<Path>,
}

impl Session {
    pub(crate) fn new(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            first_text: None,
            second_text: None,
            surrendered: false,
            chosen_path: None,
        }
    }

    /// Returns both offering texts once all three sacrifices are given.
    #[must_use]
    pub fn completed_offerings(&self) -> Option<(&str, &str)> {
        match (&self.first_text, &self.second_text, self.surrendered) {
            (Some(first), Some(second), true) => Some((first, second)),
            _ => None,
        }
    }

    /// Whether all three sacrifices are given.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_offerings().is_some()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn session() -> Session {
        Session::new(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_new_session_is_incomplete() {
        let s = session();
        assert!(!s.is_complete());
        assert_eq!(s.completed_offerings(), None);
    }

    #[test]
    fn test_surrender_alone_is_not_enough() {
        let mut s = session();
        s.first_text = Some("quest".into());
        s.surrendered = true;
        assert!(!s.is_complete());
    }

    #[test]
    fn test_all_three_sacrifices_complete_the_session() {
        let mut s = session();
        s.first_text = Some("quest".into());
        s.second_text = Some("project".into());
        s.surrendered = true;
        assert_eq!(s.completed_offerings(), Some(("quest", "project")));
    }
}
