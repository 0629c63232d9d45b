// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Point-earning action kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::points::PointsError;

/// A user behavior that earns points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    RideOffered,
    RideJoinRequested,
    BadgeEarned,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [
        ActionKind::RideOffered,
        ActionKind::RideJoinRequested,
        ActionKind::BadgeEarned,
    ];

    /// Wire token for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::RideOffered => "ride_offered",
            ActionKind::RideJoinRequested => "ride_join_requested",
            ActionKind::BadgeEarned => "badge_earned",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = PointsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PointsError::UnknownActionKind(s.to_string()))
    }
}
