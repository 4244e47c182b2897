//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use coven_core::clock::Clock;
use coven_core::mirror::OfferingSink;
use coven_core::rng::DeterministicRng;
use coven_test_support::{FixedClock, RecordingSink, SequenceRng};
use http_body_util::BodyExt;
use tower::ServiceExt;

use coven_api::config::AppConfig;
use coven_api::routes;
use coven_api::state::AppState;

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build state with deterministic Clock/RNG, no mirror and default links.
pub fn build_test_state() -> AppState {
    build_test_state_with(SequenceRng::new(vec![]), None, AppConfig::default())
}

/// Build state with a custom RNG, optional sink and config.
pub fn build_test_state_with(
    rng: SequenceRng,
    sink: Option<Arc<dyn OfferingSink>>,
    config: AppConfig,
) -> AppState {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    AppState::new(fixed_clock(), rng, sink, config)
}

/// Build the full app router. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    routes::app(build_test_state())
}

/// Build the full app router with a custom `SequenceRng` for tests that need
/// a pinned roll, coin side or omen.
pub fn build_test_app_with_rng(rng: SequenceRng) -> Router {
    routes::app(build_test_state_with(rng, None, AppConfig::default()))
}

/// Build the full app router mirroring into a `RecordingSink`.
pub fn build_test_app_with_sink() -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let dyn_sink: Arc<dyn OfferingSink> = sink.clone();
    let state = build_test_state_with(
        SequenceRng::new(vec![]),
        Some(dyn_sink),
        AppConfig::default(),
    );
    (routes::app(state), sink)
}

/// Yield to the runtime until the sink holds `count` offerings or the
/// attempts run out. Mirror deliveries run on detached tasks.
pub async fn wait_for_deliveries(sink: &RecordingSink, count: usize) {
    for _ in 0..100 {
        if sink.delivered().len() >= count {
            return;
        }
        tokio::task::yield_now().await;
    }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}
