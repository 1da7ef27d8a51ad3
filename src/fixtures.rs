// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Built-in sample data used when no fixture file is configured.

use crate::models::ActivityRecord;

#[allow(clippy::too_many_arguments)]
fn record(
    id: u64,
    category: &str,
    duration: &str,
    step_count: u64,
    calorie_count: u64,
    distance: &str,
    pace: &str,
    date: &str,
    time: &str,
) -> ActivityRecord {
    ActivityRecord {
        id,
        category: category.to_string(),
        duration_label: duration.to_string(),
        distance_label: distance.to_string(),
        pace_label: pace.to_string(),
        step_count,
        calorie_count,
        date: date.to_string(),
        time_label: time.to_string(),
    }
}

/// Five activities across 2025-01-13..=2025-01-15, newest day first.
pub fn sample_activities() -> Vec<ActivityRecord> {
    vec![
        record(1, "Walking", "55 Min", 6050, 260, "4.2 km", "7:30 /km", "2025-01-15", "08:30 AM"),
        record(2, "Running", "35 Min", 5600, 380, "5.5 km", "6:22 /km", "2025-01-15", "06:00 AM"),
        record(3, "Cycling", "45 Min", 0, 420, "12.0 km", "3:45 /km", "2025-01-14", "07:00 PM"),
        record(4, "Walking", "30 Min", 3500, 150, "2.5 km", "8:00 /km", "2025-01-14", "12:00 PM"),
        record(5, "Running", "40 Min", 6200, 450, "6.2 km", "6:27 /km", "2025-01-13", "06:30 AM"),
    ]
}
