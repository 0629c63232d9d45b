// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Badge display metadata.
//!
//! Badges are awarded elsewhere; this only maps ids to how they look.
//! Unknown ids get a neutral style instead of an error because new badges
//! can show up before this table is updated.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Display style for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BadgeStyle {
    /// CSS classes for background, text, and border color
    pub color_class: &'static str,
    /// Icon name
    pub icon: &'static str,
}

const BADGE_ICON: &str = "award";

/// Style for badges not in the catalog.
pub const NEUTRAL_STYLE: BadgeStyle = BadgeStyle {
    color_class: "bg-gray-100 text-gray-700 border-gray-200",
    icon: BADGE_ICON,
};

const CATALOG: &[(&str, BadgeStyle)] = &[
    (
        "First Ride",
        BadgeStyle {
            color_class: "bg-blue-100 text-blue-700 border-blue-200",
            icon: BADGE_ICON,
        },
    ),
    (
        "Eco Warrior",
        BadgeStyle {
            color_class: "bg-green-100 text-green-700 border-green-200",
            icon: BADGE_ICON,
        },
    ),
    (
        "Social Butterfly",
        BadgeStyle {
            color_class: "bg-purple-100 text-purple-700 border-purple-200",
            icon: BADGE_ICON,
        },
    ),
    (
        "Early Bird",
        BadgeStyle {
            color_class: "bg-yellow-100 text-yellow-700 border-yellow-200",
            icon: BADGE_ICON,
        },
    ),
    (
        "Road Master",
        BadgeStyle {
            color_class: "bg-red-100 text-red-700 border-red-200",
            icon: BADGE_ICON,
        },
    ),
    (
        "Carbon Saver",
        BadgeStyle {
            color_class: "bg-emerald-100 text-emerald-700 border-emerald-200",
            icon: BADGE_ICON,
        },
    ),
];

/// Look up the style for `badge_id`, falling back to [`NEUTRAL_STYLE`].
pub fn metadata_for(badge_id: &str) -> BadgeStyle {
    CATALOG
        .iter()
        .find(|(id, _)| *id == badge_id)
        .map(|(_, style)| *style)
        .unwrap_or(NEUTRAL_STYLE)
}

pub fn is_known(badge_id: &str) -> bool {
    CATALOG.iter().any(|(id, _)| *id == badge_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_badges() {
        let style = metadata_for("Eco Warrior");
        assert_eq!(
            style.color_class,
            "bg-green-100 text-green-700 border-green-200"
        );
        assert_eq!(style.icon, "award");
        assert!(is_known("Eco Warrior"));
    }

    #[test]
    fn test_unknown_badge_uses_neutral_style() {
        assert_eq!(metadata_for("Night Owl"), NEUTRAL_STYLE);
        assert_eq!(metadata_for(""), NEUTRAL_STYLE);
        assert!(!is_known("Night Owl"));
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for (id, _) in CATALOG {
            assert!(seen.insert(*id), "Duplicate badge id: {}", id);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(metadata_for("eco warrior"), NEUTRAL_STYLE);
    }
}
