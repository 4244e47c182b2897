//! Coven Altar — mirrors accepted offerings to an external HTTP endpoint.

pub mod http_altar_sink;
