// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Carpool Rewards: points, levels, badges and leaderboards for carpoolers
//!
//! This crate provides the gamification engine (point awards, level
//! derivation, deterministic leaderboard ranking, badge styling) and a
//! small HTTP API over an in-memory store of user summaries.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::SummaryStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: SummaryStore,
}
