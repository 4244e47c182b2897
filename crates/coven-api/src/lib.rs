//! Coven Zero API library. Exposes the router, state and configuration so
//! integration tests can build the app in-process.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
