//! Routes for the oracle context: stateless dice, coin, omens, sigils and
//! echoes.

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use coven_oracle::application::command_handlers::{self, CoinFlip, DieRoll, Sigil};
use coven_oracle::domain::commands;
use coven_oracle::domain::oracle::DEFAULT_DIE_SIDES;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /roll.
#[derive(Debug, Deserialize)]
pub struct RollQuery {
    /// Number of faces; defaults to a d20.
    pub sides: Option<u32>,
}

/// Request body for POST /sigil.
#[derive(Debug, Deserialize)]
pub struct SigilRequest {
    /// Seed phrase to carve.
    pub phrase: String,
}

/// Request body for POST /echo.
#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    /// Words to echo back.
    pub text: String,
}

/// Response body carrying a single reply line.
#[derive(Debug, Serialize)]
pub struct OracleResponse {
    /// Reply text.
    pub message: String,
}

/// GET /roll
#[instrument(skip(state))]
async fn roll(
    State(state): State<AppState>,
    Query(query): Query<RollQuery>,
) -> Result<Json<DieRoll>, ApiError> {
    let command = commands::RollDie {
        correlation_id: Uuid::new_v4(),
        sides: query.sides.unwrap_or(DEFAULT_DIE_SIDES),
    };

    info!(correlation_id = %command.correlation_id, "handling roll_die command");

    Ok(Json(command_handlers::handle_roll_die(&command, &state.rng)?))
}

/// GET /coin
#[instrument(skip(state))]
async fn coin(State(state): State<AppState>) -> Result<Json<CoinFlip>, ApiError> {
    let command = commands::FlipCoin {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling flip_coin command");

    Ok(Json(command_handlers::handle_flip_coin(&command, &state.rng)?))
}

/// GET /vibe
#[instrument(skip(state))]
async fn vibe(State(state): State<AppState>) -> Result<Json<OracleResponse>, ApiError> {
    let command = commands::DrawOmen {
        correlation_id: Uuid::new_v4(),
    };

    info!(correlation_id = %command.correlation_id, "handling draw_omen command");

    let omen = command_handlers::handle_draw_omen(&command, &state.rng)?;

    Ok(Json(OracleResponse {
        message: omen.to_owned(),
    }))
}

/// POST /sigil
#[instrument(skip(request))]
async fn sigil(Json(request): Json<SigilRequest>) -> Result<Json<Sigil>, ApiError> {
    let command = commands::CarveSigil {
        correlation_id: Uuid::new_v4(),
        phrase: request.phrase,
    };

    info!(correlation_id = %command.correlation_id, "handling carve_sigil command");

    Ok(Json(command_handlers::handle_carve_sigil(&command)?))
}

/// POST /echo
#[instrument(skip(request))]
async fn echo(Json(request): Json<EchoRequest>) -> Json<OracleResponse> {
    let command = commands::EchoWords {
        correlation_id: Uuid::new_v4(),
        text: request.text,
    };

    info!(correlation_id = %command.correlation_id, "handling echo_words command");

    Json(OracleResponse {
        message: command_handlers::handle_echo_words(&command),
    })
}

/// Returns the router for the oracle context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/roll", get(roll))
        .route("/coin", get(coin))
        .route("/vibe", get(vibe))
        .route("/sigil", post(sigil))
        .route("/echo", post(echo))
}
