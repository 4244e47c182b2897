//! Routes for the rite context: the three sacrifices, the Path, status and
//! reset.

use axum::extract::{Path as UrlPath, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use coven_core::error::DomainError;
use coven_rite::application::command_handlers::{self, PathResolution};
use coven_rite::application::query_handlers::{self, SessionStatus};
use coven_rite::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Reply to an accepted First Sacrifice.
pub const FIRST_RECEIVED: &str = "Seeker—your First Sacrifice is received. The weave drinks.\n\
When ready: `/second` for the Human Project, `/third` to surrender the choice.";

/// Reply to an accepted Second Sacrifice.
pub const SECOND_RECEIVED: &str = "The Second Sacrifice burns clean. The Human Project stands named.\n\
When the hand is steady: `/third` to surrender choice.";

/// Reply to an accepted Third Sacrifice.
pub const THIRD_RECEIVED: &str =
    "The Third Sacrifice drops. The doors unhinge.\nUse `/path` and I will choose.";

/// Reply to a reset.
pub const ASHES_SCATTERED: &str = "Ashes scattered. Your slate is clean.";

/// Request body for POST /first and POST /second.
#[derive(Debug, Deserialize)]
pub struct OfferingRequest {
    /// Platform-assigned user key.
    pub user_key: String,
    /// Display name, forwarded to the altar mirror.
    pub display_name: Option<String>,
    /// The offering text.
    pub text: String,
}

/// Request body for POST /third.
#[derive(Debug, Deserialize)]
pub struct SurrenderRequest {
    /// Platform-assigned user key.
    pub user_key: String,
    /// Display name, forwarded to the altar mirror.
    pub display_name: Option<String>,
    /// Consent text; must read "I surrender".
    pub consent: String,
}

/// Request body for POST /path.
#[derive(Debug, Deserialize)]
pub struct ResolvePathRequest {
    /// Platform-assigned user key.
    pub user_key: String,
}

/// Response body returned after an accepted offering.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    /// Session progress after the offering.
    pub status: SessionStatus,
    /// Reply text.
    pub message: &'static str,
    /// Web altar link shown beside the reply.
    pub altar_url: String,
}

/// Response body for GET /{user_key}/status.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Session progress.
    #[serde(flatten)]
    pub status: SessionStatus,
    /// One-line summary.
    pub summary: String,
    /// Entry page link.
    pub fairy_url: String,
    /// Web altar link.
    pub altar_url: String,
}

/// Response body carrying only a reply text.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Reply text.
    pub message: &'static str,
}

fn require_user_key(user_key: &str) -> Result<(), ApiError> {
    if user_key.trim().is_empty() {
        return Err(DomainError::Validation("user_key must not be blank".to_owned()).into());
    }
    Ok(())
}

/// POST /first
#[instrument(skip(state, request), fields(user_key = %request.user_key))]
async fn submit_first(
    State(state): State<AppState>,
    Json(request): Json<OfferingRequest>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    require_user_key(&request.user_key)?;
    let command = commands::SubmitFirstOffering {
        correlation_id: Uuid::new_v4(),
        user_key: request.user_key,
        display_name: request.display_name,
        text: request.text,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_first command");

    let receipt =
        command_handlers::handle_submit_first(&command, &state.sessions, &state.mirror)?;

    Ok(Json(SubmissionResponse {
        status: receipt.status,
        message: FIRST_RECEIVED,
        altar_url: state.config.altar_url.clone(),
    }))
}

/// POST /second
#[instrument(skip(state, request), fields(user_key = %request.user_key))]
async fn submit_second(
    State(state): State<AppState>,
    Json(request): Json<OfferingRequest>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    require_user_key(&request.user_key)?;
    let command = commands::SubmitSecondOffering {
        correlation_id: Uuid::new_v4(),
        user_key: request.user_key,
        display_name: request.display_name,
        text: request.text,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_second command");

    let receipt =
        command_handlers::handle_submit_second(&command, &state.sessions, &state.mirror)?;

    Ok(Json(SubmissionResponse {
        status: receipt.status,
        message: SECOND_RECEIVED,
        altar_url: state.config.altar_url.clone(),
    }))
}

/// POST /third
#[instrument(skip(state, request), fields(user_key = %request.user_key))]
async fn submit_third(
    State(state): State<AppState>,
    Json(request): Json<SurrenderRequest>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    require_user_key(&request.user_key)?;
    let command = commands::SubmitSurrender {
        correlation_id: Uuid::new_v4(),
        user_key: request.user_key,
        display_name: request.display_name,
        consent: request.consent,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_surrender command");

    let receipt =
        command_handlers::handle_submit_surrender(&command, &state.sessions, &state.mirror)?;

    Ok(Json(SubmissionResponse {
        status: receipt.status,
        message: THIRD_RECEIVED,
        altar_url: state.config.altar_url.clone(),
    }))
}

/// POST /path
#[instrument(skip(state, request), fields(user_key = %request.user_key))]
async fn resolve_path(
    State(state): State<AppState>,
    Json(request): Json<ResolvePathRequest>,
) -> Result<Json<PathResolution>, ApiError> {
    require_user_key(&request.user_key)?;
    let command = commands::ResolvePath {
        correlation_id: Uuid::new_v4(),
        user_key: request.user_key,
    };

    info!(correlation_id = %command.correlation_id, "handling resolve_path command");

    let resolution = command_handlers::handle_resolve_path(&command, &state.sessions)?;

    Ok(Json(resolution))
}

/// GET /{user_key}/status
#[instrument(skip(state))]
async fn get_status(
    State(state): State<AppState>,
    UrlPath(user_key): UrlPath<String>,
) -> Json<StatusResponse> {
    let status = query_handlers::get_status(&user_key, &state.sessions);

    Json(StatusResponse {
        summary: status.summary(),
        status,
        fairy_url: state.config.fairy_url.clone(),
        altar_url: state.config.altar_url.clone(),
    })
}

/// DELETE /{user_key}
#[instrument(skip(state))]
async fn reset_session(
    State(state): State<AppState>,
    UrlPath(user_key): UrlPath<String>,
) -> Json<MessageResponse> {
    let command = commands::ResetSession {
        correlation_id: Uuid::new_v4(),
        user_key,
    };

    info!(correlation_id = %command.correlation_id, "handling reset_session command");

    command_handlers::handle_reset_session(&command, &state.sessions);

    Json(MessageResponse {
        message: ASHES_SCATTERED,
    })
}

/// Returns the router for the rite context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/first", post(submit_first))
        .route("/second", post(submit_second))
        .route("/third", post(submit_third))
        .route("/path", post(resolve_path))
        .route("/{user_key}/status", get(get_status))
        .route("/{user_key}", delete(reset_session))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use coven_core::clock::Clock;
    use coven_core::mirror::OfferingSink;
    use coven_core::rng::DeterministicRng;
    use coven_test_support::{FailingSink, FixedClock, MockRng};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::AppConfig;

    fn app_state_with(sink: Option<Arc<dyn OfferingSink>>) -> AppState {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock(Utc::now()));
        let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(MockRng));
        AppState::new(clock, rng, sink, AppConfig::default())
    }

    fn test_app_state() -> AppState {
        app_state_with(None)
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_submit_first_returns_200_with_status() {
        // Arrange
        let state = test_app_state();
        let app = router().with_state(state.clone());
        let body = serde_json::json!({ "user_key": "u1", "text": "who I am" });

        // Act
        let (status, json) = send(app, "POST", "/first", Some(body)).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"]["first_present"], true);
        assert_eq!(json["status"]["second_present"], false);
        assert_eq!(json["message"], FIRST_RECEIVED);
        assert_eq!(json["altar_url"], "https://your-site.example/altar");
        assert!(state.sessions.get("u1").is_some());
    }

    #[tokio::test]
    async fn test_submit_third_with_wrong_phrase_returns_400() {
        // Arrange
        let state = test_app_state();
        let app = router().with_state(state.clone());
        let body = serde_json::json!({ "user_key": "u1", "consent": "I Surrender!!" });

        // Act
        let (status, json) = send(app, "POST", "/third", Some(body)).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_consent_phrase");
        assert_eq!(
            json["message"],
            "The altar rejects half-measures. Type exactly: **I surrender**"
        );
        assert!(state.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_path_without_offerings_returns_409() {
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "user_key": "u1" });

        let (status, json) = send(app, "POST", "/path", Some(body)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"], "prerequisites_not_met");
    }

    #[tokio::test]
    async fn test_blank_user_key_returns_400() {
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "user_key": "  ", "text": "x" });

        let (status, json) = send(app, "POST", "/first", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_submit_first_returns_422_for_missing_text() {
        let app = router().with_state(test_app_state());
        let body = serde_json::json!({ "user_key": "u1" });

        let (status, _) = send(app, "POST", "/first", Some(body)).await;

        // Axum returns 422 for deserialization failures.
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_mirror_failure_still_returns_200() {
        let sink: Arc<dyn OfferingSink> = Arc::new(FailingSink);
        let state = app_state_with(Some(sink));
        let app = router().with_state(state.clone());
        let body = serde_json::json!({ "user_key": "u1", "text": "the project" });

        let (status, _) = send(app, "POST", "/second", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(state.sessions.get("u1").unwrap().second_text.is_some());
    }

    #[tokio::test]
    async fn test_status_for_unknown_user_is_empty() {
        let app = router().with_state(test_app_state());

        let (status, json) = send(app, "GET", "/ghost/status", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["first_present"], false);
        assert_eq!(json["chosen_path"], Value::Null);
        assert_eq!(
            json["summary"],
            "First: — | Second: — | Third (Surrender): — | Path: —"
        );
        assert_eq!(json["fairy_url"], "https://your-site.example/entry");
    }

    #[tokio::test]
    async fn test_reset_unknown_user_returns_200() {
        let app = router().with_state(test_app_state());

        let (status, json) = send(app, "DELETE", "/ghost", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], ASHES_SCATTERED);
    }
}
