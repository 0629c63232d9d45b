// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for leaderboards, profiles and point awards.

use crate::error::{AppError, Result};
use crate::models::{ActionKind, ActivityEntry};
use crate::services::badges::{self, BadgeStyle};
use crate::services::ranking::{self, LeaderboardEntry, RankingMetric};
use crate::services::{
    level_name, level_progress, GoalProgress, Impact, LevelProgress, PointsAward,
};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

const MAX_LEADERBOARD_LIMIT: usize = 100;
const RECENT_ACTIVITY_LIMIT: usize = 5;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/users/{id}/rank", get(get_rank))
        .route("/api/users/{id}/profile", get(get_profile))
        .route("/api/users/{id}/actions", post(post_action))
        .route("/api/users/{id}/badges", post(post_badge))
}

fn parse_metric(metric: Option<&str>) -> Result<RankingMetric> {
    metric
        .map(|raw| raw.parse::<RankingMetric>().map_err(AppError::from))
        .transpose()
        .map(Option::unwrap_or_default)
}

// ─── Leaderboard ─────────────────────────────────────────────

#[derive(Deserialize)]
struct LeaderboardQuery {
    /// points | rides | carbon (default points)
    metric: Option<String>,
    /// User whose rank should be reported
    user: Option<String>,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    50
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardResponse {
    pub metric: RankingMetric,
    pub entries: Vec<LeaderboardEntry>,
    /// Total number of ranked users
    pub total: usize,
    /// Rank of the requested user; `None` if not requested or unranked
    pub user_rank: Option<usize>,
}

async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>> {
    let metric = parse_metric(params.metric.as_deref())?;
    let limit = params.limit.min(MAX_LEADERBOARD_LIMIT);
    let users = state.store.snapshot();

    tracing::debug!(%metric, limit, users = users.len(), "Building leaderboard");

    let user_rank = params
        .user
        .as_deref()
        .and_then(|id| match ranking::rank_of(&users, metric, id) {
            Ok(rank) => Some(rank),
            Err(e) => {
                tracing::debug!(error = %e, "Requested user is unranked");
                None
            }
        });

    Ok(Json(LeaderboardResponse {
        metric,
        entries: ranking::leaderboard(&users, metric, limit),
        total: users.len(),
        user_rank,
    }))
}

// ─── Rank ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RankQuery {
    metric: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RankResponse {
    pub id: String,
    pub metric: RankingMetric,
    pub rank: usize,
    pub total: usize,
    pub podium: bool,
}

async fn get_rank(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<RankQuery>,
) -> Result<Json<RankResponse>> {
    let metric = parse_metric(params.metric.as_deref())?;
    let users = state.store.snapshot();
    let rank = ranking::rank_of(&users, metric, &id)?;

    Ok(Json(RankResponse {
        id,
        metric,
        rank,
        total: users.len(),
        podium: ranking::is_podium(rank),
    }))
}

// ─── Profile ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BadgeView {
    pub id: String,
    pub style: BadgeStyle,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub level: u64,
    pub level_name: String,
    pub progress: LevelProgress,
    pub badges: Vec<BadgeView>,
    pub rides_offered: u32,
    pub rides_taken: u32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_rides: u64,
    pub carbon_saved: f64,
    pub impact: Impact,
    pub goals: Vec<GoalProgress>,
    /// Newest first
    pub recent_activity: Vec<ActivityEntry>,
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .store
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    let level = user.level();
    let badges = user
        .badges()
        .iter()
        .map(|badge| BadgeView {
            id: badge.clone(),
            style: badges::metadata_for(badge),
        })
        .collect();
    let recent_activity = user
        .recent_activity(RECENT_ACTIVITY_LIMIT)
        .cloned()
        .collect();
    let goals = vec![
        GoalProgress::new(
            "Rides",
            user.total_rides() as f64,
            f64::from(state.config.rides_goal),
        ),
        GoalProgress::new(
            "Carbon Savings (kg)",
            user.carbon_saved,
            state.config.carbon_goal_kg,
        ),
    ];

    Ok(Json(ProfileResponse {
        level,
        level_name: level_name(level).to_string(),
        progress: level_progress(user.points, level),
        badges,
        total_rides: user.total_rides(),
        impact: Impact::for_user(&user),
        goals,
        recent_activity,
        id: user.id,
        name: user.name,
        points: user.points,
        rides_offered: user.rides_offered,
        rides_taken: user.rides_taken,
        carbon_saved: user.carbon_saved,
    }))
}

// ─── Actions ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct ActionRequest {
    /// Action token, e.g. "ride_offered"
    action: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActionResponse {
    #[serde(flatten)]
    #[cfg_attr(feature = "binding-generation", ts(flatten))]
    pub award: PointsAward,
    pub leveled_up: bool,
}

async fn post_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ActionRequest>,
) -> Result<Json<ActionResponse>> {
    let action = req.action.parse::<ActionKind>().inspect_err(|e| {
        tracing::warn!(user_id = %id, error = %e, "Rejected action");
    })?;

    let award = state.store.apply_action(&id, action)?;

    Ok(Json(ActionResponse {
        leveled_up: award.leveled_up(),
        award,
    }))
}

// ─── Badges ──────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
struct BadgeRequest {
    #[validate(length(min = 1, max = 64))]
    badge: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BadgeResponse {
    /// `false` if the user already held the badge
    pub awarded: bool,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub level: u64,
    pub style: BadgeStyle,
}

async fn post_badge(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<BadgeRequest>,
) -> Result<Json<BadgeResponse>> {
    req.validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid badge: {}", e)))?;

    if !badges::is_known(&req.badge) {
        tracing::debug!(badge = %req.badge, "Awarding badge missing from catalog");
    }

    let award = state.store.award_badge(&id, &req.badge)?;

    Ok(Json(BadgeResponse {
        awarded: award.awarded,
        points: award.summary.points,
        level: award.summary.level(),
        style: badges::metadata_for(&req.badge),
    }))
}
