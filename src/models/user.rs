// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User summary read model used by leveling and ranking.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::VecDeque;

use super::activity::{ActivityEntry, ACTIVITY_LOG_CAPACITY};
use crate::services::level::level_for_points;

/// Per-user gamification aggregates.
///
/// The level is never stored: it is always derived from `points` via
/// [`UserSummary::level`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Stable opaque identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Cumulative points (never negative)
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub rides_offered: u32,
    #[serde(default)]
    pub rides_taken: u32,
    /// Carbon saved in kilograms
    #[serde(default)]
    pub carbon_saved: f64,
    /// Earned badge ids in award order
    #[serde(default, deserialize_with = "dedup_badges")]
    badges: Vec<String>,
    /// Point-earning history, oldest first
    #[serde(default, skip_serializing_if = "VecDeque::is_empty")]
    activity: VecDeque<ActivityEntry>,
}

impl UserSummary {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            points: 0,
            rides_offered: 0,
            rides_taken: 0,
            carbon_saved: 0.0,
            badges: Vec::new(),
            activity: VecDeque::new(),
        }
    }

    /// Current level, derived from points.
    pub fn level(&self) -> u64 {
        level_for_points(self.points)
    }

    /// Rides offered plus rides taken.
    pub fn total_rides(&self) -> u64 {
        u64::from(self.rides_offered) + u64::from(self.rides_taken)
    }

    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Add a badge to the set.
    ///
    /// Returns `false` if the badge was already held (no-op).
    pub fn insert_badge(&mut self, badge: impl Into<String>) -> bool {
        let badge = badge.into();
        if self.has_badge(&badge) {
            return false;
        }
        self.badges.push(badge);
        true
    }

    /// Append to the activity log, dropping the oldest entry when full.
    pub fn record_activity(&mut self, entry: ActivityEntry) {
        if self.activity.len() == ACTIVITY_LOG_CAPACITY {
            self.activity.pop_front();
        }
        self.activity.push_back(entry);
    }

    /// Up to `limit` activity entries, newest first.
    pub fn recent_activity(&self, limit: usize) -> impl Iterator<Item = &ActivityEntry> {
        self.activity.iter().rev().take(limit)
    }

    /// Apply a signed point delta, saturating at zero.
    pub fn apply_delta(&mut self, delta: i64) {
        self.points = if delta >= 0 {
            self.points.saturating_add(delta.unsigned_abs())
        } else {
            self.points.saturating_sub(delta.unsigned_abs())
        };
    }
}

/// Drop repeated badge ids while keeping first-seen order.
fn dedup_badges<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    let mut badges: Vec<String> = Vec::with_capacity(raw.len());
    for badge in raw {
        if !badges.contains(&badge) {
            badges.push(badge);
        }
    }
    Ok(badges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActionKind;

    #[test]
    fn test_level_is_derived_from_points() {
        let mut user = UserSummary::new("u1");
        assert_eq!(user.level(), 1);

        user.points = 2450;
        assert_eq!(user.level(), 5);
    }

    #[test]
    fn test_insert_badge_is_idempotent() {
        let mut user = UserSummary::new("u1");

        assert!(user.insert_badge("Eco Warrior"));
        assert!(user.insert_badge("Early Bird"));
        assert!(!user.insert_badge("Eco Warrior"));

        assert_eq!(user.badges(), &["Eco Warrior", "Early Bird"]);
    }

    #[test]
    fn test_apply_delta_saturates_at_zero() {
        let mut user = UserSummary::new("u1");
        user.points = 30;

        user.apply_delta(-100);
        assert_eq!(user.points, 0);

        user.apply_delta(50);
        assert_eq!(user.points, 50);
    }

    #[test]
    fn test_deserialize_drops_duplicate_badges() {
        let json = r#"{
            "id": "7",
            "points": 100,
            "badges": ["First Ride", "Early Bird", "First Ride"]
        }"#;

        let user: UserSummary = serde_json::from_str(json).unwrap();

        assert_eq!(user.badges(), &["First Ride", "Early Bird"]);
        assert_eq!(user.rides_offered, 0);
        assert_eq!(user.carbon_saved, 0.0);
    }

    #[test]
    fn test_activity_log_is_bounded_and_newest_first() {
        let mut user = UserSummary::new("u1");
        for delta in 0..(ACTIVITY_LOG_CAPACITY as i64 + 5) {
            user.record_activity(ActivityEntry::new(ActionKind::RideOffered, delta, None));
        }

        let all: Vec<i64> = user.recent_activity(usize::MAX).map(|e| e.delta).collect();
        assert_eq!(all.len(), ACTIVITY_LOG_CAPACITY);
        assert_eq!(all[0], ACTIVITY_LOG_CAPACITY as i64 + 4);
        assert_eq!(*all.last().unwrap(), 5);

        let newest: Vec<i64> = user.recent_activity(3).map(|e| e.delta).collect();
        assert_eq!(newest, vec![24, 23, 22]);
    }

    #[test]
    fn test_total_rides() {
        let mut user = UserSummary::new("u1");
        user.rides_offered = 23;
        user.rides_taken = 18;
        assert_eq!(user.total_rides(), 41);
    }
}
