//! Commands for the rite context.

use coven_core::command::Command;
use uuid::Uuid;

/// Command to offer the First Sacrifice (the First Quest).
#[derive(Debug, Clone)]
pub struct SubmitFirstOffering {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Platform-assigned user key.
    pub user_key: String,
    /// Display name, forwarded to the altar mirror only.
    pub display_name: Option<String>,
    /// Who the Seeker is, where they are, what they want.
    pub text: String,
}

impl Command for SubmitFirstOffering {
    fn command_type(&self) -> &'static str {
        "rite.submit_first"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to offer the Second Sacrifice (the Human Project).
#[derive(Debug, Clone)]
pub struct SubmitSecondOffering {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Platform-assigned user key.
    pub user_key: String,
    /// Display name, forwarded to the altar mirror only.
    pub display_name: Option<String>,
    /// The trial the Seeker is in: scope, constraints, stakes.
    pub text: String,
}

impl Command for SubmitSecondOffering {
    fn command_type(&self) -> &'static str {
        "rite.submit_second"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to offer the Third Sacrifice (surrender the choice).
#[derive(Debug, Clone)]
pub struct SubmitSurrender {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Platform-assigned user key.
    pub user_key: String,
    /// Display name, forwarded to the altar mirror only.
    pub display_name: Option<String>,
    /// Raw consent text as typed by the Seeker.
    pub consent: String,
}

impl Command for SubmitSurrender {
    fn command_type(&self) -> &'static str {
        "rite.submit_surrender"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to divine the Seeker's Path.
#[derive(Debug, Clone)]
pub struct ResolvePath {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Platform-assigned user key.
    pub user_key: String,
}

impl Command for ResolvePath {
    fn command_type(&self) -> &'static str {
        "rite.resolve_path"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to wipe a Seeker's offerings.
#[derive(Debug, Clone)]
pub struct ResetSession {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Platform-assigned user key.
    pub user_key: String,
}

impl Command for ResetSession {
    fn command_type(&self) -> &'static str {
        "rite.reset_session"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
