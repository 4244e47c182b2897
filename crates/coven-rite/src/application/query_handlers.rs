//! Query handlers for the rite context.

use serde::Serialize;

use crate::domain::path::Path;
use crate::domain::session::Session;
use crate::store::SessionStore;

/// Read-only view of a Seeker's progress.
///
/// Offering texts are intentionally omitted; the status only says which
/// sacrifices have been laid down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    /// First Sacrifice given.
    pub first_present: bool,
    /// Second Sacrifice given.
    pub second_present: bool,
    /// Third Sacrifice given.
    pub surrendered: bool,
    /// The divined Path, if any.
    pub chosen_path: Option<Path>,
}

impl SessionStatus {
    /// Derives the status of an optional session. `None` yields the empty
    /// status.
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        session.map_or_else(Self::default, |s| Self {
            first_present: s.first_text.is_some(),
            second_present: s.second_text.is_some(),
            surrendered: s.surrendered,
            chosen_path: s.chosen_path,
        })
    }

    /// One-line summary, e.g. `First: ✅ | Second: — | Third (Surrender): — | Path: —`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mark = |done: bool| if done { "✅" } else { "—" };
        format!(
            "First: {} | Second: {} | Third (Surrender): {} | Path: {}",
            mark(self.first_present),
            mark(self.second_present),
            mark(self.surrendered),
            self.chosen_path.map_or("—", Path::name),
        )
    }
}

/// Retrieves a Seeker's progress. Unknown users get the empty status.
#[must_use]
pub fn get_status(user_key: &str, store: &SessionStore) -> SessionStatus {
    SessionStatus::from_session(store.get(user_key).as_ref())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use coven_test_support::FixedClock;

    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        )))
    }

    #[test]
    fn test_get_status_unknown_user_is_empty() {
        let status = get_status("nobody", &store());

        assert_eq!(status, SessionStatus::default());
        assert_eq!(
            status.summary(),
            "First: — | Second: — | Third (Surrender): — | Path: —"
        );
    }

    #[test]
    fn test_get_status_reflects_progress_and_path() {
        // Arrange
        let store = store();
        store.record_first("u1", "quest");
        store.record_surrender("u1");
        store.set_chosen_path("u1", Path::FortyToes);

        // Act
        let status = get_status("u1", &store);

        // Assert
        assert_eq!(
            status,
            SessionStatus {
                first_present: true,
                second_present: false,
                surrendered: true,
                chosen_path: Some(Path::FortyToes),
            }
        );
        assert_eq!(
            status.summary(),
            "First: ✅ | Second: — | Third (Surrender): ✅ | Path: Forty Toes"
        );
    }

    #[test]
    fn test_status_serializes_path_by_name() {
        let status = SessionStatus {
            chosen_path: Some(Path::Witch),
            ..SessionStatus::default()
        };

        let json = serde_json::to_value(status).unwrap();

        assert_eq!(json["chosen_path"], "Witch");
        assert_eq!(json["first_present"], false);
    }
}
