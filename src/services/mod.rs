// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - gamification and ranking logic.

pub mod badges;
pub mod impact;
pub mod level;
pub mod points;
pub mod ranking;
pub mod store;

pub use impact::{GoalProgress, Impact};
pub use level::{level_for_points, level_name, level_progress, LevelProgress, LevelTier};
pub use points::{points_for_action, PointsError};
pub use ranking::{rank, rank_of, LeaderboardEntry, RankingError, RankingMetric};
pub use store::{BadgeAward, PointsAward, StoreError, SummaryStore};
