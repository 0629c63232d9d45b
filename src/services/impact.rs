// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile impact figures and goal progress.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::UserSummary;

/// Average passengers per offered ride.
const PASSENGERS_PER_RIDE: f64 = 2.3;
/// Fuel cost saved per ride taken (USD).
const FUEL_SAVED_PER_RIDE_USD: f64 = 15.0;
/// CO₂ absorbed by one tree per year (kg).
const CO2_PER_TREE_KG: f64 = 22.0;

/// Derived "what you've achieved" numbers for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Impact {
    pub people_helped: f64,
    pub fuel_saved_usd: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub trees_equivalent: u64,
}

impl Impact {
    pub fn for_user(user: &UserSummary) -> Self {
        let trees = (user.carbon_saved / CO2_PER_TREE_KG).round();
        Self {
            people_helped: f64::from(user.rides_offered) * PASSENGERS_PER_RIDE,
            fuel_saved_usd: f64::from(user.rides_taken) * FUEL_SAVED_PER_RIDE_USD,
            // Negative or NaN carbon totals count as no trees.
            trees_equivalent: if trees.is_finite() && trees > 0.0 {
                trees as u64
            } else {
                0
            },
        }
    }
}

/// Progress toward a numeric target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GoalProgress {
    pub label: String,
    pub current: f64,
    pub target: f64,
    /// Fraction reached, in `[0, 1]`
    pub fraction: f64,
}

impl GoalProgress {
    /// A target of zero (or less) is already met.
    pub fn new(label: impl Into<String>, current: f64, target: f64) -> Self {
        let fraction = if target > 0.0 {
            (current / target).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            label: label.into(),
            current,
            target,
            fraction: if fraction.is_nan() { 0.0 } else { fraction },
        }
    }
}
