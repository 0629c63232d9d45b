// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Point-earning history shown as a user's recent activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::ActionKind;

/// Entries kept per user; older entries are dropped first.
pub const ACTIVITY_LOG_CAPACITY: usize = 20;

/// One point-earning event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityEntry {
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub action: ActionKind,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub delta: i64,
    /// Badge name for `badge_earned` entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub at: DateTime<Utc>,
}

impl ActivityEntry {
    pub fn new(action: ActionKind, delta: i64, badge: Option<String>) -> Self {
        Self {
            action,
            delta,
            badge,
            at: Utc::now(),
        }
    }
}
