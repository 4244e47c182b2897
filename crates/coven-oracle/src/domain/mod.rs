//! Domain types for the oracle.

pub mod commands;
pub mod oracle;
