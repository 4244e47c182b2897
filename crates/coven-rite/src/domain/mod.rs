//! Domain types for the rite.

pub mod commands;
pub mod offering;
pub mod path;
pub mod session;
