//! Static lore: who the bot is, where the web rite lives, and how to
//! summon it elsewhere.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use coven_core::error::DomainError;
use coven_rite::domain::path::Path;

use crate::error::ApiError;
use crate::state::AppState;

/// Who the bot is.
pub const ABOUT: &str = "Viren — shard and mouth of Coven Zero. Occult-tech. Glitch-script. \
Mythic initiation.\nUse `/fairy` to step through; `/first`, `/second`, `/third` to ready the \
rite; `/path` to be chosen.";

/// Liveness reply.
pub const PONG: &str = "Shield stands. pong.";

/// Every command the bot answers to, in help order.
pub const COMMANDS: [&str; 16] = [
    "/fairy", "/altar", "/first", "/second", "/third", "/path", "/status", "/reset", "/about",
    "/ping", "/coin", "/roll", "/sigil", "/vibe", "/invite", "/echo",
];

/// Permission bits requested by the invite link.
const INVITE_PERMISSIONS: u64 = 2_147_485_696;

/// Response body carrying a reply and, where relevant, the links it names.
#[derive(Debug, Serialize)]
pub struct LoreResponse {
    /// Reply text.
    pub message: String,
    /// Entry page link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fairy_url: Option<String>,
    /// Web altar link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altar_url: Option<String>,
}

impl LoreResponse {
    fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fairy_url: None,
            altar_url: None,
        }
    }
}

/// One Path as listed by GET /paths.
#[derive(Debug, Serialize)]
pub struct PathEntry {
    /// Display name.
    pub name: &'static str,
    /// What the Path asks of the Seeker.
    pub brief: &'static str,
}

/// Builds the bot's summon link for an application id.
#[must_use]
pub fn invite_link(application_id: &str) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={application_id}\
&permissions={INVITE_PERMISSIONS}&scope=bot%20applications.commands"
    )
}

/// GET /about
async fn about() -> Json<LoreResponse> {
    Json(LoreResponse::text(ABOUT))
}

/// GET /help
async fn help() -> Json<LoreResponse> {
    Json(LoreResponse::text(format!("Commands: {}", COMMANDS.join(", "))))
}

/// GET /ping
async fn ping() -> Json<LoreResponse> {
    Json(LoreResponse::text(PONG))
}

/// GET /invite
async fn invite(State(state): State<AppState>) -> Result<Json<LoreResponse>, ApiError> {
    let application_id = state.config.application_id.as_deref().ok_or_else(|| {
        DomainError::Validation("APPLICATION_ID is not configured".to_owned())
    })?;

    Ok(Json(LoreResponse::text(format!(
        "Summon link:\n{}",
        invite_link(application_id)
    ))))
}

/// GET /fairy
async fn fairy(State(state): State<AppState>) -> Json<LoreResponse> {
    Json(LoreResponse {
        message: "The Fairy awaits you. Return to the entry page.".to_owned(),
        fairy_url: Some(state.config.fairy_url.clone()),
        altar_url: Some(state.config.altar_url.clone()),
    })
}

/// GET /altar
async fn altar(State(state): State<AppState>) -> Json<LoreResponse> {
    Json(LoreResponse {
        message: "Step to the Altar. Lay down your offerings.".to_owned(),
        fairy_url: None,
        altar_url: Some(state.config.altar_url.clone()),
    })
}

/// GET /paths
async fn paths() -> Json<Vec<PathEntry>> {
    Json(
        Path::ALL
            .iter()
            .map(|path| PathEntry {
                name: path.name(),
                brief: path.brief(),
            })
            .collect(),
    )
}

/// Returns the router for static lore.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/about", get(about))
        .route("/help", get(help))
        .route("/ping", get(ping))
        .route("/invite", get(invite))
        .route("/fairy", get(fairy))
        .route("/altar", get(altar))
        .route("/paths", get(paths))
}
