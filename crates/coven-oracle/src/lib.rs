//! Coven Zero — oracle commands.
//!
//! Stateless utilities offered alongside the rite: a d20 for omens, fate's
//! coin, a daily vibe, text-sigils and echoes in Coven cadence.

pub mod application;
pub mod domain;
