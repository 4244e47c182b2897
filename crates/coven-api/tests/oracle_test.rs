//! Integration tests for the oracle endpoints.

mod common;

use axum::http::StatusCode;
use coven_test_support::SequenceRng;
use serde_json::json;

#[tokio::test]
async fn test_roll_defaults_to_d20() {
    let app = common::build_test_app_with_rng(SequenceRng::new(vec![17]));

    let (status, json) = common::get_json(app, "/api/v1/oracle/roll").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sides"], 20);
    assert_eq!(json["roll"], 17);
    assert_eq!(json["message"], "d20: **17**");
}

#[tokio::test]
async fn test_roll_honours_sides_query() {
    let app = common::build_test_app_with_rng(SequenceRng::new(vec![4]));

    let (status, json) = common::get_json(app, "/api/v1/oracle/roll?sides=6").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "d6: **4**");
}

#[tokio::test]
async fn test_roll_rejects_one_sided_die() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(app, "/api/v1/oracle/roll?sides=1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_coin_speaks() {
    let app = common::build_test_app_with_rng(SequenceRng::new(vec![1]));

    let (status, json) = common::get_json(app, "/api/v1/oracle/coin").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["side"], "Tails");
    assert_eq!(json["message"], "The coin speaks: **Tails**");
}

#[tokio::test]
async fn test_vibe_draws_an_omen() {
    let app = common::build_test_app_with_rng(SequenceRng::new(vec![2]));

    let (status, json) = common::get_json(app, "/api/v1/oracle/vibe").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Ask for a no; harvest the yes.");
}

#[tokio::test]
async fn test_sigil_carves_unique_letters() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/oracle/sigil",
        &json!({ "phrase": "ship it, ship it" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sigil"], "SHIPT");
    assert_eq!(json["message"], "Sigil: `SHIPT` → carve it, carry it, ship it.");
}

#[tokio::test]
async fn test_sigil_without_letters_returns_400() {
    let app = common::build_test_app();

    let (status, json) =
        common::post_json(app, "/api/v1/oracle/sigil", &json!({ "phrase": "404" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "validation_error");
}

#[tokio::test]
async fn test_echo_speaks_in_cadence() {
    let app = common::build_test_app();

    let (status, json) = common::post_json(
        app,
        "/api/v1/oracle/echo",
        &json!({ "text": "the glitch   is the plan" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Seeker— the glitch is the plan");
}
