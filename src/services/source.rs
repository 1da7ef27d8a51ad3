// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only activity data providers.

use crate::models::{ActivityRecord, TodaySnapshot, UserProfile};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Anything that can hand out the current activity records.
pub trait ActivitySource: Send + Sync {
    /// List current records, in source order.
    fn list_records(&self) -> &[ActivityRecord];
}

/// In-memory source loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticActivitySource {
    records: Vec<ActivityRecord>,
}

/// On-disk fixture layout. Every section except `activities` is optional.
#[derive(Debug, Deserialize)]
struct FixtureFile {
    activities: Vec<ActivityRecord>,
    #[serde(default)]
    profile: Option<UserProfile>,
    #[serde(default)]
    today: Option<TodaySnapshot>,
}

/// Non-activity sections of a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureExtras {
    pub profile: Option<UserProfile>,
    pub today: Option<TodaySnapshot>,
}

impl StaticActivitySource {
    /// Build a source from records.
    ///
    /// Rejects duplicate ids, and step or calorie counts whose sum over the
    /// whole collection does not fit in a `u64` (so every per-day total is
    /// exact).
    pub fn new(records: Vec<ActivityRecord>) -> Result<Self, SourceError> {
        let mut seen = HashSet::with_capacity(records.len());
        let (mut steps, mut calories) = (0u64, 0u64);
        for record in &records {
            if !seen.insert(record.id) {
                return Err(SourceError::DuplicateId(record.id));
            }
            steps = steps
                .checked_add(record.step_count)
                .ok_or(SourceError::TotalOverflow("step_count"))?;
            calories = calories
                .checked_add(record.calorie_count)
                .ok_or(SourceError::TotalOverflow("calorie_count"))?;
        }
        Ok(Self { records })
    }

    /// The built-in sample records.
    pub fn sample() -> Self {
        Self {
            records: crate::fixtures::sample_activities(),
        }
    }

    /// Load a fixture from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<(Self, FixtureExtras), SourceError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| SourceError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a fixture from a JSON string.
    ///
    /// Returns the source plus the optional profile and today sections.
    pub fn load_from_json(json_data: &str) -> Result<(Self, FixtureExtras), SourceError> {
        let fixture: FixtureFile = serde_json::from_str(json_data)
            .map_err(|e| SourceError::ParseError(e.to_string()))?;

        let source = Self::new(fixture.activities)?;
        let extras = FixtureExtras {
            profile: fixture.profile,
            today: fixture.today,
        };

        tracing::info!(count = source.records.len(), "Loaded activity fixture");
        Ok((source, extras))
    }
}

impl ActivitySource for StaticActivitySource {
    fn list_records(&self) -> &[ActivityRecord] {
        &self.records
    }
}

/// Errors from loading activity fixtures.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse fixture JSON: {0}")]
    ParseError(String),

    #[error("Duplicate activity id: {0}")]
    DuplicateId(u64),

    #[error("Sum of {0} over all activities overflows")]
    TotalOverflow(&'static str),
}
