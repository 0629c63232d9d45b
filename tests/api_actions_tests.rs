// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point award and badge endpoint tests.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_ride_offered_awards_points_and_levels_up() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::post_json(
            "/api/users/1/actions",
            json!({ "action": "ride_offered" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(body["delta"], 50);
    assert_eq!(body["points"], 2500);
    assert_eq!(body["level"], 6);
    assert_eq!(body["leveled_up"], true);
    assert_eq!(body["user_id"], "1");
    assert_eq!(body["action"], "ride_offered");

    let user = state.store.get("1").unwrap();
    assert_eq!(user.points, 2500);
    assert_eq!(user.rides_offered, 24);
}

#[tokio::test]
async fn test_join_request_awards_points() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::post_json(
            "/api/users/5/actions",
            json!({ "action": "ride_join_requested" }),
        ))
        .await
        .unwrap();

    let body = common::json_body(response).await;
    assert_eq!(body["delta"], 25);
    assert_eq!(body["leveled_up"], false);
    assert_eq!(state.store.get("5").unwrap().rides_taken, 29);
}

#[tokio::test]
async fn test_unknown_action_rejected() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::post_json(
            "/api/users/1/actions",
            json!({ "action": "bogus" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::json_body(response).await;
    assert_eq!(body["details"], "Unknown action kind: bogus");
    assert_eq!(state.store.get("1").unwrap().points, 2450);
}

#[tokio::test]
async fn test_action_for_unknown_user() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::post_json(
            "/api/users/nobody/actions",
            json!({ "action": "ride_offered" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_badge_awarded_once() {
    let (app, state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/users/5/badges",
            json!({ "badge": "Carbon Saver" }),
        ))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["awarded"], true);
    assert_eq!(body["points"], 2200);
    assert_eq!(
        body["style"]["color_class"],
        "bg-emerald-100 text-emerald-700 border-emerald-200"
    );

    let response = app
        .oneshot(common::post_json(
            "/api/users/5/badges",
            json!({ "badge": "Carbon Saver" }),
        ))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["awarded"], false);
    assert_eq!(body["points"], 2200);

    assert_eq!(state.store.get("5").unwrap().badges(), &["Carbon Saver"]);
}

#[tokio::test]
async fn test_badge_name_validation() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::post_json(
            "/api/users/5/badges",
            json!({ "badge": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let long_badge = "a".repeat(65);
    let response = app
        .oneshot(common::post_json(
            "/api/users/5/badges",
            json!({ "badge": long_badge }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_action_changes_leaderboard() {
    let (app, _state) = common::create_test_app();

    // Lisa (1890) needs 14 badge awards to pass Sarah (3250).
    for badge in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N"] {
        let response = app
            .clone()
            .oneshot(common::post_json(
                "/api/users/6/badges",
                json!({ "badge": badge }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(common::get("/api/users/6/rank?metric=points"))
        .await
        .unwrap();
    let body = common::json_body(response).await;
    assert_eq!(body["rank"], 1);
}
