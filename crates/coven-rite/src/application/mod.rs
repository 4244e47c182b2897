//! Application services: command/query handlers and offering mirroring.

pub mod command_handlers;
pub mod mirror;
pub mod query_handlers;
