//! Clock abstraction for determinism.

use chrono::{DateTime, Utc};

/// Abstraction over system time, injected wherever a timestamp is stamped
/// onto a session or an outbound offering.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
