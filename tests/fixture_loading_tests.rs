// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loading activity data from a fixture file.

use pocketfit::config::Config;
use pocketfit::models::{FitnessGoal, TodaySnapshot};
use pocketfit::services::{group_by_date, SourceError};
use pocketfit::AppState;
use std::path::PathBuf;

fn config_with_fixture(path: &str) -> Config {
    Config {
        fixture_path: Some(PathBuf::from(path)),
        ..Config::default()
    }
}

#[test]
fn test_state_uses_sample_data_without_fixture() {
    let state = AppState::from_config(Config::default()).expect("Sample data should load");

    assert_eq!(state.source.list_records().len(), 5);
    assert_eq!(state.profile.name, "John Doe");
    assert_eq!(state.today, TodaySnapshot::default());
}

#[test]
fn test_state_loads_fixture_file() {
    let state = AppState::from_config(config_with_fixture("tests/fixtures/activities.json"))
        .expect("Fixture should load");

    let records = state.source.list_records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, 10);

    assert_eq!(state.profile.name, "Jane Runner");
    assert_eq!(state.profile.goal, FitnessGoal::GeneralFitness);
    // No "today" section in the file
    assert_eq!(state.today, TodaySnapshot::default());

    let history = group_by_date(records);
    assert_eq!(history.len(), 2);
    assert_eq!(history.get("2025-03-02").unwrap().total_steps, 8400);
}

#[test]
fn test_missing_fixture_file_fails() {
    let result = AppState::from_config(config_with_fixture("tests/fixtures/missing.json"));
    assert!(matches!(result, Err(SourceError::IoError(_))));
}
