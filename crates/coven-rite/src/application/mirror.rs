//! Fire-and-forget mirroring of accepted offerings.

use std::sync::Arc;

use coven_core::clock::Clock;
use coven_core::mirror::{MirroredOffering, OfferingKind, OfferingSink};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

/// Spawns one background delivery per accepted offering.
///
/// Deliveries are never awaited on the request path. Failures are logged at
/// the task boundary and dropped.
#[derive(Clone)]
pub struct MirrorDispatcher {
    sink: Option<Arc<dyn OfferingSink>>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for MirrorDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MirrorDispatcher")
            .field("enabled", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

impl MirrorDispatcher {
    /// Creates a dispatcher delivering to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn OfferingSink>, clock: Arc<dyn Clock>) -> Self {
        Self {
            sink: Some(sink),
            clock,
        }
    }

    /// Creates a dispatcher that drops every offering.
    #[must_use]
    pub fn disabled(clock: Arc<dyn Clock>) -> Self {
        Self { sink: None, clock }
    }

    /// Whether a sink is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Mirrors one offering in the background.
    ///
    /// Returns the delivery task, or `None` when no sink is configured.
    /// Callers on the request path drop the handle; the task keeps running.
    /// Must be called from within a tokio runtime when a sink is configured.
    pub fn dispatch(
        &self,
        correlation_id: Uuid,
        user_key: &str,
        display_name: Option<&str>,
        kind: OfferingKind,
        payload: serde_json::Value,
    ) -> Option<JoinHandle<()>> {
        let sink = Arc::clone(self.sink.as_ref()?);
        let offering = MirroredOffering {
            event_id: Uuid::now_v7(),
            correlation_id,
            occurred_at: self.clock.now(),
            user_key: user_key.to_owned(),
            display_name: display_name.map(str::to_owned),
            kind,
            payload,
        };

        Some(tokio::spawn(async move {
            match sink.deliver(&offering).await {
                Ok(()) => debug!(
                    event_id = %offering.event_id,
                    kind = %offering.kind,
                    "offering mirrored to altar"
                ),
                Err(e) => warn!(
                    event_id = %offering.event_id,
                    kind = %offering.kind,
                    error = %e,
                    "offering mirror failed"
                ),
            }
        }))
    }
}
