// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use pocketfit::config::Config;
use pocketfit::models::ActivityRecord;
use pocketfit::routes::create_router;
use pocketfit::services::StaticActivitySource;
use pocketfit::AppState;
use std::sync::Arc;

/// Build a record with display fields filled in.
#[allow(dead_code)]
pub fn make_record(id: u64, category: &str, date: &str, steps: u64, calories: u64) -> ActivityRecord {
    ActivityRecord {
        id,
        category: category.to_string(),
        duration_label: "30 Min".to_string(),
        distance_label: "3.0 km".to_string(),
        pace_label: "7:00 /km".to_string(),
        step_count: steps,
        calorie_count: calories,
        date: date.to_string(),
        time_label: "07:00 AM".to_string(),
    }
}

/// Create a test app over the built-in sample activities.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with(StaticActivitySource::sample())
}

/// Create a test app over a custom source.
#[allow(dead_code)]
pub fn create_test_app_with(source: StaticActivitySource) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default(), Arc::new(source)));
    (create_router(state.clone()), state)
}

/// Issue a GET and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (axum::http::StatusCode, serde_json::Value) {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
