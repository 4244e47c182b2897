//! Application services for the oracle.

pub mod command_handlers;
