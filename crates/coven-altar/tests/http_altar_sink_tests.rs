//! Integration tests for `HttpAltarSink` against a local altar server.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use coven_altar::http_altar_sink::HttpAltarSink;
use coven_core::mirror::{MirrorError, MirroredOffering, OfferingKind, OfferingSink};
use uuid::Uuid;

type Received = Arc<Mutex<Vec<serde_json::Value>>>;

async fn accept(
    State(received): State<Received>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    received.lock().unwrap().push(body);
    StatusCode::NO_CONTENT
}

async fn reject() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

/// Starts a local altar and returns its address plus the bodies it received.
async fn spawn_altar() -> (SocketAddr, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/altar", post(accept))
        .route("/closed", post(reject))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, received)
}

fn offering() -> MirroredOffering {
    MirroredOffering {
        event_id: Uuid::new_v4(),
        correlation_id: Uuid::new_v4(),
        occurred_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        user_key: "1402591776321310761".to_owned(),
        display_name: Some("seeker".to_owned()),
        kind: OfferingKind::First,
        payload: serde_json::json!({ "first": "Spill it. Not pretty—true." }),
    }
}

#[tokio::test]
async fn test_deliver_posts_offering_as_json() {
    // Arrange
    let (addr, received) = spawn_altar().await;
    let sink = HttpAltarSink::new(format!("http://{addr}/altar"), Duration::from_secs(5)).unwrap();
    let offering = offering();

    // Act
    sink.deliver(&offering).await.unwrap();

    // Assert
    let bodies = received.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["user_key"], "1402591776321310761");
    assert_eq!(bodies[0]["display_name"], "seeker");
    assert_eq!(bodies[0]["kind"], "first");
    assert_eq!(bodies[0]["payload"]["first"], "Spill it. Not pretty—true.");
    assert_eq!(bodies[0]["event_id"], offering.event_id.to_string());
}

#[tokio::test]
async fn test_deliver_reports_rejection_status() {
    let (addr, received) = spawn_altar().await;
    let sink = HttpAltarSink::new(format!("http://{addr}/closed"), Duration::from_secs(5)).unwrap();

    let result = sink.deliver(&offering()).await;

    assert!(matches!(result, Err(MirrorError::Rejected { status: 503 })));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_deliver_reports_transport_failure() {
    // Bind and drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let sink = HttpAltarSink::new(format!("http://{addr}/altar"), Duration::from_secs(2)).unwrap();

    let result = sink.deliver(&offering()).await;

    assert!(matches!(result, Err(MirrorError::Transport(_))));
}
