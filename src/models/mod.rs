// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod action;
pub mod activity;
pub mod ride;
pub mod user;

pub use action::ActionKind;
pub use activity::{ActivityEntry, ACTIVITY_LOG_CAPACITY};
pub use ride::{build_route, Ride, RideError};
pub use user::UserSummary;
