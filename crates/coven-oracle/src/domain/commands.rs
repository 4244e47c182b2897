//! Commands for the oracle context.

use coven_core::command::Command;
use uuid::Uuid;

/// Command to roll a die for an omen.
#[derive(Debug, Clone)]
pub struct RollDie {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Number of faces; the classic omen die is a d20.
    pub sides: u32,
}

impl Command for RollDie {
    fn command_type(&self) -> &'static str {
        "oracle.roll_die"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to flip fate's coin.
#[derive(Debug, Clone)]
pub struct FlipCoin {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for FlipCoin {
    fn command_type(&self) -> &'static str {
        "oracle.flip_coin"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to draw a one-line omen for the day.
#[derive(Debug, Clone)]
pub struct DrawOmen {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for DrawOmen {
    fn command_type(&self) -> &'static str {
        "oracle.draw_omen"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to carve a text-sigil from a seed phrase.
#[derive(Debug, Clone)]
pub struct CarveSigil {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Seed phrase; letters only work best.
    pub phrase: String,
}

impl Command for CarveSigil {
    fn command_type(&self) -> &'static str {
        "oracle.carve_sigil"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to echo words back in Coven cadence.
#[derive(Debug, Clone)]
pub struct EchoWords {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// What shall be echoed.
    pub text: String,
}

impl Command for EchoWords {
    fn command_type(&self) -> &'static str {
        "oracle.echo_words"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
