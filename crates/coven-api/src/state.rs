//! Shared application state.

use std::sync::{Arc, Mutex};

use coven_core::clock::Clock;
use coven_core::mirror::OfferingSink;
use coven_core::rng::DeterministicRng;
use coven_rite::application::mirror::MirrorDispatcher;
use coven_rite::store::SessionStore;

use crate::config::AppConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// RNG behind the oracle's dice, coin and omens.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Per-user rite progress for this process.
    pub sessions: Arc<SessionStore>,
    /// Background mirror of accepted offerings.
    pub mirror: MirrorDispatcher,
    /// Links and ids surfaced in replies.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state with an empty session store.
    ///
    /// `clock` stamps new sessions and mirrored offerings. Passing `None`
    /// for `sink` disables offering mirroring.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        sink: Option<Arc<dyn OfferingSink>>,
        config: AppConfig,
    ) -> Self {
        let mirror = match sink {
            Some(sink) => MirrorDispatcher::new(sink, clock.clone()),
            None => MirrorDispatcher::disabled(clock.clone()),
        };
        Self {
            rng,
            sessions: Arc::new(SessionStore::new(clock)),
            mirror,
            config: Arc::new(config),
        }
    }
}
