// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point awards for user actions.
//!
//! The deltas are fixed policy. Applying them to a user's total is up to
//! the caller (see [`crate::services::SummaryStore`]).

use crate::models::ActionKind;

/// Points for offering a ride.
pub const RIDE_OFFERED_POINTS: i64 = 50;
/// Points for requesting a seat on someone else's ride.
pub const RIDE_JOIN_REQUESTED_POINTS: i64 = 25;
/// Points for earning a badge.
pub const BADGE_EARNED_POINTS: i64 = 100;

impl ActionKind {
    /// Point delta awarded for this action.
    pub fn points(self) -> i64 {
        match self {
            ActionKind::RideOffered => RIDE_OFFERED_POINTS,
            ActionKind::RideJoinRequested => RIDE_JOIN_REQUESTED_POINTS,
            ActionKind::BadgeEarned => BADGE_EARNED_POINTS,
        }
    }
}

/// Point delta for an action token such as `"ride_offered"`.
pub fn points_for_action(action: &str) -> Result<i64, PointsError> {
    Ok(action.parse::<ActionKind>()?.points())
}

/// Errors from point lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointsError {
    #[error("Unknown action kind: {0}")]
    UnknownActionKind(String),
}
