// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use carpool_rewards::config::Config;
use carpool_rewards::routes::create_router;
use carpool_rewards::services::SummaryStore;
use carpool_rewards::AppState;
use std::sync::Arc;

pub const SEED_FILE: &str = "data/users.json";

/// Load the committed seed users.
#[allow(dead_code)]
pub fn seeded_store() -> SummaryStore {
    SummaryStore::load_from_file(SEED_FILE)
        .expect("Failed to load seed users - is data/ committed?")
}

/// Create a test app backed by the seed users.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        store: seeded_store(),
    });

    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
