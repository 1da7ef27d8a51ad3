//! Aggregates computed from activity records.
//!
//! Everything here is derived on demand from the record list; nothing is
//! stored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityRecord;

/// Step/calorie totals over a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityTotals {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_steps: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_calories: u64,
    pub activity_count: u32,
}

impl ActivityTotals {
    /// Fold one record into the totals. Sums saturate at `u64::MAX`.
    pub fn add(&mut self, record: &ActivityRecord) {
        self.total_steps = self.total_steps.saturating_add(record.step_count);
        self.total_calories = self.total_calories.saturating_add(record.calorie_count);
        self.activity_count = self.activity_count.saturating_add(1);
    }
}

/// Records sharing an identical date string, plus their totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DateGroup {
    pub date: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_steps: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_calories: u64,
    pub activity_count: u32,
    pub activities: Vec<ActivityRecord>,
}

impl DateGroup {
    fn new(date: String) -> Self {
        Self {
            date,
            total_steps: 0,
            total_calories: 0,
            activity_count: 0,
            activities: Vec::new(),
        }
    }

    fn push(&mut self, record: ActivityRecord) {
        self.total_steps = self.total_steps.saturating_add(record.step_count);
        self.total_calories = self.total_calories.saturating_add(record.calorie_count);
        self.activity_count = self.activity_count.saturating_add(1);
        self.activities.push(record);
    }

    pub fn totals(&self) -> ActivityTotals {
        ActivityTotals {
            total_steps: self.total_steps,
            total_calories: self.total_calories,
            activity_count: self.activity_count,
        }
    }
}

/// Date-keyed groups in first-seen order.
///
/// Keys are compared as raw strings: "2025-01-15" and "January 15, 2025"
/// land in different groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyHistory {
    groups: Vec<DateGroup>,
    index: HashMap<String, usize>,
}

impl DailyHistory {
    /// Add a record to the group for its date, creating the group on first sight.
    pub fn insert(&mut self, record: ActivityRecord) {
        let slot = match self.index.get(&record.date) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(record.date.clone(), slot);
                self.groups.push(DateGroup::new(record.date.clone()));
                slot
            }
        };
        self.groups[slot].push(record);
    }

    pub fn get(&self, date: &str) -> Option<&DateGroup> {
        self.index.get(date).map(|&slot| &self.groups[slot])
    }

    /// Dates in first-seen order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.date.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DateGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_groups(self) -> Vec<DateGroup> {
        self.groups
    }
}

impl FromIterator<ActivityRecord> for DailyHistory {
    fn from_iter<I: IntoIterator<Item = ActivityRecord>>(iter: I) -> Self {
        let mut history = DailyHistory::default();
        for record in iter {
            history.insert(record);
        }
        history
    }
}

/// Live values shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySnapshot {
    pub steps: u64,
    pub calories: u64,
    pub current_activity: String,
}

impl Default for TodaySnapshot {
    fn default() -> Self {
        Self {
            steps: 3000,
            calories: 250,
            current_activity: "Walking".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(id: u64, date: &str, steps: u64, calories: u64) -> ActivityRecord {
        ActivityRecord {
            id,
            category: "Walking".to_string(),
            duration_label: "10 Min".to_string(),
            distance_label: "1.0 km".to_string(),
            pace_label: "10:00 /km".to_string(),
            step_count: steps,
            calorie_count: calories,
            date: date.to_string(),
            time_label: "08:00 AM".to_string(),
        }
    }

    #[test]
    fn test_totals_accumulate() {
        let mut totals = ActivityTotals::default();
        totals.add(&make_record(1, "2025-01-01", 100, 10));
        totals.add(&make_record(2, "2025-01-02", 250, 30));

        assert_eq!(totals.total_steps, 350);
        assert_eq!(totals.total_calories, 40);
        assert_eq!(totals.activity_count, 2);
    }

    #[test]
    fn test_history_keeps_first_seen_order() {
        let history: DailyHistory = vec![
            make_record(1, "2025-01-02", 1, 1),
            make_record(2, "2025-01-01", 1, 1),
            make_record(3, "2025-01-02", 1, 1),
        ]
        .into_iter()
        .collect();

        let dates: Vec<&str> = history.dates().collect();
        assert_eq!(dates, vec!["2025-01-02", "2025-01-01"]);
        assert_eq!(history.get("2025-01-02").unwrap().activity_count, 2);
    }

    #[test]
    fn test_history_keys_are_raw_strings() {
        let history: DailyHistory = vec![
            make_record(1, "2025-01-15", 1, 1),
            make_record(2, "January 15, 2025", 1, 1),
        ]
        .into_iter()
        .collect();

        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_group_totals_match_members() {
        let history: DailyHistory = vec![
            make_record(1, "2025-01-15", 6050, 260),
            make_record(2, "2025-01-15", 5600, 380),
        ]
        .into_iter()
        .collect();

        let group = history.get("2025-01-15").unwrap();
        assert_eq!(
            group.totals(),
            ActivityTotals {
                total_steps: 11650,
                total_calories: 640,
                activity_count: 2,
            }
        );
        let ids: Vec<u64> = group.activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let records = vec![
            make_record(1, "2025-01-15", u64::MAX, u64::MAX),
            make_record(2, "2025-01-15", 1, 1),
        ];

        let mut totals = ActivityTotals::default();
        for record in &records {
            totals.add(record);
        }
        assert_eq!(totals.total_steps, u64::MAX);
        assert_eq!(totals.total_calories, u64::MAX);
        assert_eq!(totals.activity_count, 2);

        let history: DailyHistory = records.into_iter().collect();
        let group = history.get("2025-01-15").unwrap();
        assert_eq!(group.total_steps, u64::MAX);
        assert_eq!(group.activity_count, 2);
    }
}
