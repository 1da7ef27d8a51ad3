// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Logged activity model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Category selector that matches every record.
pub const ALL_CATEGORIES: &str = "All";

/// Filter chips offered by the history view, in display order.
pub const FILTER_OPTIONS: [&str; 4] = [ALL_CATEGORIES, "Walking", "Running", "Cycling"];

/// One logged activity entry.
///
/// Display fields (`duration_label`, `distance_label`, `pace_label`,
/// `time_label`) are pre-formatted and never converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityRecord {
    /// Unique identifier within the collection
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    /// Activity type (Walking, Running, Cycling, ...)
    pub category: String,
    /// e.g. "55 Min"
    pub duration_label: String,
    /// e.g. "4.2 km"
    pub distance_label: String,
    /// e.g. "7:30 /km"
    pub pace_label: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub step_count: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calorie_count: u64,
    /// Calendar date, usually `YYYY-MM-DD`
    pub date: String,
    /// e.g. "08:30 AM"
    pub time_label: String,
}

/// Icon shown next to an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityIcon {
    Walk,
    Run,
    Bike,
}

impl ActivityIcon {
    /// Pick the icon for a category name. Unknown categories get the run icon.
    pub fn for_category(category: &str) -> Self {
        match category.to_lowercase().as_str() {
            "walking" => ActivityIcon::Walk,
            "cycling" => ActivityIcon::Bike,
            _ => ActivityIcon::Run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_is_case_insensitive() {
        assert_eq!(ActivityIcon::for_category("Walking"), ActivityIcon::Walk);
        assert_eq!(ActivityIcon::for_category("CYCLING"), ActivityIcon::Bike);
        assert_eq!(ActivityIcon::for_category("running"), ActivityIcon::Run);
    }

    #[test]
    fn test_icon_falls_back_to_run() {
        assert_eq!(ActivityIcon::for_category("Swimming"), ActivityIcon::Run);
        assert_eq!(ActivityIcon::for_category(""), ActivityIcon::Run);
    }

    #[test]
    fn test_record_deserializes_from_json() {
        let json = r#"{
            "id": 7,
            "category": "Walking",
            "duration_label": "20 Min",
            "distance_label": "1.5 km",
            "pace_label": "9:00 /km",
            "step_count": 2100,
            "calorie_count": 90,
            "date": "2025-02-01",
            "time_label": "09:15 AM"
        }"#;

        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.step_count, 2100);
        assert_eq!(record.date, "2025-02-01");
    }

    #[test]
    fn test_negative_counts_are_rejected() {
        let json = r#"{
            "id": 1, "category": "Walking", "duration_label": "", "distance_label": "",
            "pace_label": "", "step_count": -5, "calorie_count": 0,
            "date": "2025-02-01", "time_label": ""
        }"#;

        assert!(serde_json::from_str::<ActivityRecord>(json).is_err());
    }
}
