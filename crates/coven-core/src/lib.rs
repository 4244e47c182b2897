//! Coven Core — shared abstractions.
//!
//! This crate defines the traits and types that the rite, oracle and API
//! crates depend on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod mirror;
pub mod rng;
