// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Ride offer model.
//!
//! Rides are owned by the ride board; they only matter here as the
//! trigger for point-earning actions.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A ride offered by a driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ride {
    pub id: String,
    /// User ID of the driver (owner)
    pub driver_id: String,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub available_seats: u32,
    /// Waypoints, starting at `from` and ending at `to`
    pub route: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Ride {
    /// Check that the route starts at `from`, ends at `to`, and has no
    /// repeated stops.
    pub fn validate(&self) -> Result<(), RideError> {
        let (first, last) = match (self.route.first(), self.route.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(RideError::EmptyRoute),
        };

        if *first != self.from {
            return Err(RideError::RouteEndpoint(first.clone()));
        }
        if *last != self.to {
            return Err(RideError::RouteEndpoint(last.clone()));
        }

        let stops: &[String] = if self.route.len() > 2 {
            &self.route[1..self.route.len() - 1]
        } else {
            &[]
        };
        for (i, stop) in stops.iter().enumerate() {
            if *stop == self.from || *stop == self.to || stops[..i].contains(stop) {
                return Err(RideError::DuplicateStop(stop.clone()));
            }
        }

        Ok(())
    }

    /// Check a request for `seats` seats by `rider_id`.
    pub fn check_seat_request(&self, rider_id: &str, seats: u32) -> Result<(), RideError> {
        if rider_id == self.driver_id {
            return Err(RideError::OwnRide);
        }
        if seats == 0 || seats > self.available_seats {
            return Err(RideError::SeatsUnavailable {
                requested: seats,
                available: self.available_seats,
            });
        }
        Ok(())
    }
}

/// Assemble a route from the endpoints and the intermediate stops the
/// driver entered.
///
/// Blank stops are dropped, stops are trimmed, and anything repeating an
/// earlier stop or an endpoint is skipped.
pub fn build_route<S: AsRef<str>>(from: &str, stops: &[S], to: &str) -> Vec<String> {
    let mut route = vec![from.to_string()];

    for stop in stops {
        let stop = stop.as_ref().trim();
        if stop.is_empty() || stop == to || route.iter().any(|s| s == stop) {
            continue;
        }
        route.push(stop.to_string());
    }

    // A round trip with no stops collapses to a single waypoint.
    if from != to || route.len() > 1 {
        route.push(to.to_string());
    }
    route
}

/// Ride validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RideError {
    #[error("Route is empty")]
    EmptyRoute,

    #[error("Route endpoint does not match ride: {0}")]
    RouteEndpoint(String),

    #[error("Duplicate stop in route: {0}")]
    DuplicateStop(String),

    #[error("Drivers cannot request seats on their own ride")]
    OwnRide,

    #[error("Requested {requested} seats but {available} available")]
    SeatsUnavailable { requested: u32, available: u32 },
}
