// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Level derivation from cumulative points.
//!
//! Level `L` starts at `(L - 1) * 500` points, so level 1 covers 0..500,
//! level 2 covers 500..1000, and so on.

use serde::Serialize;
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Points between consecutive levels.
pub const POINTS_PER_LEVEL: u64 = 500;

/// Largest level `L >= 1` with `(L - 1) * 500 <= points`.
pub fn level_for_points(points: u64) -> u64 {
    points / POINTS_PER_LEVEL + 1
}

/// Points needed to reach `level`. Level 0 is treated as level 1.
pub fn points_for_level(level: u64) -> u64 {
    level.saturating_sub(1).saturating_mul(POINTS_PER_LEVEL)
}

/// Progress through the current level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LevelProgress {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub current_floor: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub next_ceiling: u64,
    /// Fraction of the level completed, in `[0, 1]`
    pub fraction_complete: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub points_to_next: u64,
}

/// Progress of `points` through `level`.
///
/// `level` is expected to be `level_for_points(points)`. If it is not, the
/// fraction is still clamped to `[0, 1]` and `points_to_next` bottoms out
/// at 0.
pub fn level_progress(points: u64, level: u64) -> LevelProgress {
    let level = level.max(1);
    let current_floor = points_for_level(level);
    let next_ceiling = level.saturating_mul(POINTS_PER_LEVEL);

    // Ceiling is always POINTS_PER_LEVEL above the floor except when
    // saturated at u64::MAX.
    let span = next_ceiling.saturating_sub(current_floor).max(1);
    let earned = points.saturating_sub(current_floor);
    let fraction_complete = (earned as f64 / span as f64).clamp(0.0, 1.0);

    LevelProgress {
        current_floor,
        next_ceiling,
        fraction_complete,
        points_to_next: next_ceiling.saturating_sub(points),
    }
}

/// Named tiers shown next to a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LevelTier {
    Newbie,
    Commuter,
    RoadWarrior,
    CarPoolPro,
    CarPoolChampion,
}

impl LevelTier {
    pub fn for_level(level: u64) -> Self {
        match level {
            0..=1 => LevelTier::Newbie,
            2..=4 => LevelTier::Commuter,
            5..=9 => LevelTier::RoadWarrior,
            10..=19 => LevelTier::CarPoolPro,
            _ => LevelTier::CarPoolChampion,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LevelTier::Newbie => "Newbie",
            LevelTier::Commuter => "Commuter",
            LevelTier::RoadWarrior => "Road Warrior",
            LevelTier::CarPoolPro => "CarPool Pro",
            LevelTier::CarPoolChampion => "CarPool Champion",
        }
    }
}

impl fmt::Display for LevelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display label for a level.
pub fn level_name(level: u64) -> &'static str {
    LevelTier::for_level(level).label()
}
