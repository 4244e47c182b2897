//! Shared test doubles for the Coven Zero rite bot.

mod clock;
mod rng;
mod sink;

pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
pub use sink::{FailingSink, RecordingSink};
