// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity filtering, grouping and totals.
//!
//! All functions are pure and never fail: unknown categories produce an
//! empty list and missing ids produce `None`.

use crate::models::{ActivityRecord, ActivityTotals, DailyHistory, ALL_CATEGORIES};
use crate::time_utils::parse_iso_date;
use std::cmp::Reverse;

/// Category selector for list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector string. `"All"` is the match-everything sentinel.
    pub fn parse(selector: &str) -> Self {
        if selector == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selector.to_string())
        }
    }

    pub fn matches(&self, record: &ActivityRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
        }
    }
}

/// Records whose category equals `category`, in input order.
/// `"All"` returns every record.
pub fn filter_by_category(records: &[ActivityRecord], category: &str) -> Vec<ActivityRecord> {
    let filter = CategoryFilter::parse(category);
    records
        .iter()
        .filter(|r| filter.matches(r))
        .cloned()
        .collect()
}

/// Group records by exact date string, keeping first-seen date order.
pub fn group_by_date(records: &[ActivityRecord]) -> DailyHistory {
    records.iter().cloned().collect()
}

/// Look up a record by id.
pub fn find_by_id(records: &[ActivityRecord], id: u64) -> Option<&ActivityRecord> {
    records.iter().find(|r| r.id == id)
}

/// Totals across all given records.
pub fn summarize(records: &[ActivityRecord]) -> ActivityTotals {
    records.iter().fold(ActivityTotals::default(), |mut acc, r| {
        acc.add(r);
        acc
    })
}

/// Progress toward a goal as a fraction in `0.0..=1.0`. A zero goal gives 0.
pub fn goal_progress(value: u64, goal: u64) -> f32 {
    if goal == 0 {
        return 0.0;
    }
    (value as f32 / goal as f32).clamp(0.0, 1.0)
}

/// Whole-percent label value for a progress fraction (truncated).
pub fn progress_percent(progress: f32) -> u32 {
    (progress * 100.0) as u32
}

/// Order records most recent first.
///
/// Only strict `YYYY-MM-DD` dates are ordered; records with other date text
/// follow them in their original relative order. The sort is stable.
pub fn sort_by_date_desc(records: &mut [ActivityRecord]) {
    records.sort_by_key(|r| match parse_iso_date(&r.date) {
        Some(date) => (0, Reverse(Some(date))),
        None => (1, Reverse(None)),
    });
}
