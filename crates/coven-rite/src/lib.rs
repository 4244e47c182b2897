//! Coven Zero — the rite bounded context.
//!
//! Collects the three sacrifices per user, enforces their ordering, and
//! divines the user's Path from the words they offered.

pub mod application;
pub mod domain;
pub mod store;
