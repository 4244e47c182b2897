//! In-memory session store.
//!
//! Sessions live for the lifetime of the process; a restart forgets every
//! Seeker. All access goes through one mutex, which serializes concurrent
//! submissions from the same user. The lock is never held across an
//! `.await`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use coven_core::clock::Clock;

use crate::domain::path::Path;
use crate::domain::session::Session;

/// Keyed store of per-user rite progress.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.len())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Creates an empty store. `clock` stamps `created_at` on new sessions.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        // Every mutation is a single field write, so a panicking holder
        // cannot leave a half-updated session behind.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn upsert(&self, user_key: &str, update: impl FnOnce(&mut Session)) -> Session {
        let mut sessions = self.lock();
        let session = sessions
            .entry(user_key.to_owned())
            .or_insert_with(|| Session::new(self.clock.now()));
        update(session);
        session.clone()
    }

    /// Records the First Sacrifice, creating the session if needed.
    pub fn record_first(&self, user_key: &str, text: &str) -> Session {
        self.upsert(user_key, |s| s.first_text = Some(text.to_owned()))
    }

    /// Records the Second Sacrifice, creating the session if needed.
    pub fn record_second(&self, user_key: &str, text: &str) -> Session {
        self.upsert(user_key, |s| s.second_text = Some(text.to_owned()))
    }

    /// Records the Third Sacrifice. The caller must already have checked
    /// the consent phrase.
    pub fn record_surrender(&self, user_key: &str) -> Session {
        self.upsert(user_key, |s| s.surrendered = true)
    }

    /// Returns a snapshot of the user's session, if any.
    #[must_use]
    pub fn get(&self, user_key: &str) -> Option<Session> {
        self.lock().get(user_key).cloned()
    }

    /// Overwrites the chosen Path of an existing session.
    ///
    /// Returns `false`, without creating anything, when the user has no
    /// session.
    pub fn set_chosen_path(&self, user_key: &str, path: Path) -> bool {
        match self.lock().get_mut(user_key) {
            Some(session) => {
                session.chosen_path = Some(path);
                true
            }
            None => false,
        }
    }

    /// Removes the user's session. Returns whether one existed.
    pub fn reset(&self, user_key: &str) -> bool {
        self.lock().remove(user_key).is_some()
    }

    /// Number of live sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no session is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
