// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Carpool Rewards API Server
//!
//! Serves leaderboards, profiles and point awards for carpoolers.

use carpool_rewards::{config::Config, services::SummaryStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Carpool Rewards API");

    // Load user summaries
    let store = match &config.seed_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading user summaries");
            SummaryStore::load_from_file(path).expect("Failed to load user summaries")
        }
        None => {
            tracing::warn!("SEED_FILE not set, starting with an empty store");
            SummaryStore::new()
        }
    };

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Build router
    let app = carpool_rewards::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carpool_rewards=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
