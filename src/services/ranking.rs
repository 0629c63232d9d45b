// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard ranking.
//!
//! Users are ordered by a metric (descending) with ties broken by `id`
//! (ascending), which makes the order total and independent of input order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::UserSummary;

/// Dimension a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum RankingMetric {
    #[default]
    Points,
    Rides,
    Carbon,
}

impl RankingMetric {
    pub const ALL: [RankingMetric; 3] = [
        RankingMetric::Points,
        RankingMetric::Rides,
        RankingMetric::Carbon,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RankingMetric::Points => "points",
            RankingMetric::Rides => "rides",
            RankingMetric::Carbon => "carbon",
        }
    }

    /// Sort key for `user` under this metric.
    pub fn value(self, user: &UserSummary) -> MetricValue {
        match self {
            RankingMetric::Points => MetricValue::Count(user.points),
            RankingMetric::Rides => MetricValue::Count(user.total_rides()),
            // Adding 0.0 folds -0.0 into 0.0, which total_cmp would otherwise
            // order apart.
            RankingMetric::Carbon => MetricValue::Kilograms(user.carbon_saved + 0.0),
        }
    }

    /// Human-readable value, e.g. `"2450 pts"` or `"156.8 kg CO₂"`.
    pub fn display_value(self, user: &UserSummary) -> String {
        match self.value(user) {
            MetricValue::Count(n) if self == RankingMetric::Points => format!("{} pts", n),
            MetricValue::Count(n) => format!("{} rides", n),
            MetricValue::Kilograms(kg) => format!("{} kg CO₂", kg),
        }
    }
}

impl fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingMetric {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankingMetric::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| RankingError::UnknownMetric(s.to_string()))
    }
}

/// A metric's numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u64),
    Kilograms(f64),
}

impl MetricValue {
    /// Total order over values of the same kind.
    ///
    /// Mixed kinds never occur for a single metric; they fall back to
    /// comparing as `f64`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (MetricValue::Count(a), MetricValue::Count(b)) => a.cmp(b),
            (MetricValue::Kilograms(a), MetricValue::Kilograms(b)) => a.total_cmp(b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Kilograms(kg) => kg,
        }
    }
}

/// Leaderboard order: higher metric first, then lower `id` first.
pub fn compare(metric: RankingMetric, a: &UserSummary, b: &UserSummary) -> Ordering {
    metric
        .value(b)
        .total_cmp(&metric.value(a))
        .then_with(|| a.id.cmp(&b.id))
}

/// Rank `users` by `metric`. The input is not modified.
pub fn rank(users: &[UserSummary], metric: RankingMetric) -> Vec<&UserSummary> {
    let mut ranked: Vec<&UserSummary> = users.iter().collect();
    ranked.sort_by(|a, b| compare(metric, a, b));
    ranked
}

/// 1-based position of `target_id` in `rank(users, metric)`.
pub fn rank_of(
    users: &[UserSummary],
    metric: RankingMetric,
    target_id: &str,
) -> Result<usize, RankingError> {
    rank(users, metric)
        .iter()
        .position(|u| u.id == target_id)
        .map(|idx| idx + 1)
        .ok_or_else(|| RankingError::UserNotFound(target_id.to_string()))
}

/// Whether a rank earns a podium marker.
pub fn is_podium(rank: usize) -> bool {
    (1..=3).contains(&rank)
}

/// Podium positions and the icon each is shown with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum Podium {
    Gold,
    Silver,
    Bronze,
}

impl Podium {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Podium::Gold),
            2 => Some(Podium::Silver),
            3 => Some(Podium::Bronze),
            _ => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Podium::Gold => "trophy",
            Podium::Silver => "medal",
            Podium::Bronze => "award",
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub level: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub value: MetricValue,
    pub display_value: String,
    pub podium: Option<Podium>,
}

/// Ranked rows for the first `limit` users.
pub fn leaderboard(
    users: &[UserSummary],
    metric: RankingMetric,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    rank(users, metric)
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(idx, user)| {
            let rank = idx + 1;
            LeaderboardEntry {
                rank,
                id: user.id.clone(),
                name: user.name.clone(),
                level: user.level(),
                value: metric.value(user),
                display_value: metric.display_value(user),
                podium: Podium::for_rank(rank),
            }
        })
        .collect()
}

/// Errors from ranking lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankingError {
    #[error("User not found in ranking: {0}")]
    UserNotFound(String),

    #[error("Unknown ranking metric: {0}")]
    UnknownMetric(String),
}
