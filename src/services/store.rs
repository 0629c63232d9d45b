// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory user summary store.
//!
//! This is the caller side of the points ledger: it applies deltas to
//! stored totals and hands out snapshots for ranking. Each mutation runs
//! while holding the DashMap entry guard for that user, so concurrent
//! awards to the same user are never lost.

use dashmap::DashMap;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{ActionKind, ActivityEntry, Ride, RideError, UserSummary};

/// Shared handle to the user summaries.
#[derive(Default, Clone)]
pub struct SummaryStore {
    users: Arc<DashMap<String, UserSummary>>,
}

/// Result of applying an action to a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PointsAward {
    pub user_id: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub action: ActionKind,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub delta: i64,
    /// Point total after the award
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub previous_level: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub level: u64,
}

impl PointsAward {
    pub fn leveled_up(&self) -> bool {
        self.level > self.previous_level
    }
}

/// Result of awarding a badge.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeAward {
    /// `false` if the user already held the badge
    pub awarded: bool,
    pub points: Option<PointsAward>,
    pub summary: UserSummary,
}

impl SummaryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load summaries from a JSON file containing an array of users.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| StoreError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load summaries from a JSON array string.
    pub fn load_from_json(json_data: &str) -> Result<Self, StoreError> {
        let summaries: Vec<UserSummary> =
            serde_json::from_str(json_data).map_err(|e| StoreError::Parse(e.to_string()))?;

        let store = Self::new();
        for summary in summaries {
            check_summary(&summary)?;
            if store.users.contains_key(&summary.id) {
                return Err(StoreError::DuplicateUser(summary.id));
            }
            store.users.insert(summary.id.clone(), summary);
        }

        tracing::info!(count = store.len(), "Loaded user summaries");
        Ok(store)
    }

    /// Insert or replace a summary.
    pub fn upsert(&self, summary: UserSummary) -> Result<(), StoreError> {
        check_summary(&summary)?;
        self.users.insert(summary.id.clone(), summary);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<UserSummary> {
        self.users.get(id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Copy of all summaries, sorted by id.
    pub fn snapshot(&self) -> Vec<UserSummary> {
        let mut users: Vec<UserSummary> = self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }

    /// Apply the points for `action` and bump the matching ride counter.
    pub fn apply_action(
        &self,
        user_id: &str,
        action: ActionKind,
    ) -> Result<PointsAward, StoreError> {
        let mut entry = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;

        let award = apply_to_summary(entry.value_mut(), action, None);
        drop(entry);

        tracing::info!(
            user_id,
            action = %action,
            delta = award.delta,
            points = award.points,
            level = award.level,
            "Applied action"
        );
        if award.leveled_up() {
            tracing::info!(
                user_id,
                from = award.previous_level,
                to = award.level,
                "User leveled up"
            );
        }

        Ok(award)
    }

    /// Add `badge` to the user's set. A newly earned badge also awards
    /// the badge points; a badge the user already holds changes nothing.
    pub fn award_badge(&self, user_id: &str, badge: &str) -> Result<BadgeAward, StoreError> {
        let mut entry = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;

        let summary = entry.value_mut();
        let awarded = summary.insert_badge(badge);
        let points =
            awarded.then(|| apply_to_summary(summary, ActionKind::BadgeEarned, Some(badge)));
        let summary = summary.clone();
        drop(entry);

        if awarded {
            tracing::info!(user_id, badge, points = summary.points, "Badge awarded");
        } else {
            tracing::debug!(user_id, badge, "Badge already held");
        }

        Ok(BadgeAward {
            awarded,
            points,
            summary,
        })
    }

    /// Award the driver for offering `ride`.
    pub fn record_ride_offered(&self, ride: &Ride) -> Result<PointsAward, StoreError> {
        ride.validate()?;
        self.apply_action(&ride.driver_id, ActionKind::RideOffered)
    }

    /// Award `rider_id` for requesting `seats` seats on `ride`.
    pub fn record_join_request(
        &self,
        ride: &Ride,
        rider_id: &str,
        seats: u32,
    ) -> Result<PointsAward, StoreError> {
        ride.check_seat_request(rider_id, seats)?;
        self.apply_action(rider_id, ActionKind::RideJoinRequested)
    }
}

/// Carbon must be a finite, non-negative amount.
fn check_summary(summary: &UserSummary) -> Result<(), StoreError> {
    if !summary.carbon_saved.is_finite() || summary.carbon_saved < 0.0 {
        return Err(StoreError::InvalidSummary {
            id: summary.id.clone(),
            reason: format!("carbon_saved must be non-negative, got {}", summary.carbon_saved),
        });
    }
    Ok(())
}

fn apply_to_summary(
    summary: &mut UserSummary,
    action: ActionKind,
    badge: Option<&str>,
) -> PointsAward {
    let previous_level = summary.level();
    let delta = action.points();
    summary.apply_delta(delta);
    summary.record_activity(ActivityEntry::new(action, delta, badge.map(str::to_string)));

    match action {
        ActionKind::RideOffered => summary.rides_offered = summary.rides_offered.saturating_add(1),
        ActionKind::RideJoinRequested => {
            summary.rides_taken = summary.rides_taken.saturating_add(1)
        }
        ActionKind::BadgeEarned => {}
    }

    PointsAward {
        user_id: summary.id.clone(),
        action,
        delta,
        points: summary.points,
        previous_level,
        level: summary.level(),
    }
}

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid ride: {0}")]
    InvalidRide(#[from] RideError),

    #[error("Failed to read file: {0}")]
    Io(String),

    #[error("Failed to parse user summaries: {0}")]
    Parse(String),

    #[error("Duplicate user id: {0}")]
    DuplicateUser(String),

    #[error("Invalid summary for user {id}: {reason}")]
    InvalidSummary { id: String, reason: String },
}
