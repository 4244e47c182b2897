//! Test sinks — mock `OfferingSink` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use coven_core::mirror::{MirrorError, MirroredOffering, OfferingSink};

/// A sink that records every delivered offering and always succeeds.
#[derive(Debug, Default)]
pub struct RecordingSink {
    delivered: Mutex<Vec<MirroredOffering>>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all offerings delivered so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn delivered(&self) -> Vec<MirroredOffering> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl OfferingSink for RecordingSink {
    async fn deliver(&self, offering: &MirroredOffering) -> Result<(), MirrorError> {
        self.delivered.lock().unwrap().push(offering.clone());
        Ok(())
    }
}

/// A sink whose deliveries always fail with a transport error. Useful for
/// checking that mirror failures never reach the caller.
#[derive(Debug)]
pub struct FailingSink;

#[async_trait]
impl OfferingSink for FailingSink {
    async fn deliver(&self, _offering: &MirroredOffering) -> Result<(), MirrorError> {
        Err(MirrorError::Transport("connection refused".into()))
    }
}
