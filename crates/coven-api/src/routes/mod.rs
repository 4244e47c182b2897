//! Route modules organized by bounded context.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod lore;
pub mod oracle;
pub mod rite;

/// Builds the full application router without middleware layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/rite", rite::router())
        .nest("/api/v1/oracle", oracle::router())
        .nest("/api/v1/lore", lore::router())
        .with_state(state)
}
