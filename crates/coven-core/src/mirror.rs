//! Outbound offering mirror abstraction.
//!
//! Accepted offerings may be copied to an external altar. Delivery is
//! best-effort: a `MirrorError` is logged by whoever spawned the delivery
//! and never reaches the user.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Which step of the rite an offering belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferingKind {
    /// First Sacrifice: the First Quest.
    First,
    /// Second Sacrifice: the Human Project.
    Second,
    /// Third Sacrifice: surrender of the choice.
    Third,
}

impl OfferingKind {
    /// Wire name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

impl fmt::Display for OfferingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A copy of an accepted offering, as sent to the altar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirroredOffering {
    /// Unique identifier of this mirror event.
    pub event_id: Uuid,
    /// Correlation ID of the command that accepted the offering.
    pub correlation_id: Uuid,
    /// When the offering was accepted.
    pub occurred_at: DateTime<Utc>,
    /// Platform-assigned user key.
    pub user_key: String,
    /// Human-readable name of the user, when the platform supplied one.
    pub display_name: Option<String>,
    /// The rite step.
    pub kind: OfferingKind,
    /// Step-specific payload (`{"first": ..}`, `{"second": ..}`, `{"surrender": true}`).
    pub payload: serde_json::Value,
}

/// Failure to deliver a mirrored offering.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The request never completed (connect, timeout, body encoding).
    #[error("mirror transport failed: {0}")]
    Transport(String),

    /// The altar answered with a non-success status.
    #[error("mirror rejected with status {status}")]
    Rejected {
        /// HTTP status code returned by the altar.
        status: u16,
    },
}

/// Destination for mirrored offerings.
#[async_trait]
pub trait OfferingSink: Send + Sync {
    /// Deliver one offering.
    async fn deliver(&self, offering: &MirroredOffering) -> Result<(), MirrorError>;
}
