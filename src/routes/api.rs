// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only API routes backing the app screens.

use crate::error::{AppError, Result};
use crate::models::{
    ActivityIcon, ActivityRecord, ActivityTotals, DateGroup, FitnessGoal, UserProfile,
    ALL_CATEGORIES, FILTER_OPTIONS,
};
use crate::services::aggregator::{
    filter_by_category, find_by_id, goal_progress, group_by_date, progress_percent,
    sort_by_date_desc, summarize,
};
use crate::time_utils::{format_count, format_date_label};
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Daily step target shown on the home screen.
pub const DAILY_STEP_GOAL: u64 = 10_000;
/// Daily calorie target shown on the home screen.
pub const DAILY_CALORIE_GOAL: u64 = 1_000;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/home", get(get_home))
        .route("/api/activities", get(get_activities))
        .route("/api/activities/{id}", get(get_activity))
        .route("/api/history", get(get_history))
}

/// Activity plus the display fields derived from it.
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityView {
    #[serde(flatten)]
    pub record: ActivityRecord,
    pub icon: ActivityIcon,
    pub date_label: String,
}

impl From<ActivityRecord> for ActivityView {
    fn from(record: ActivityRecord) -> Self {
        Self {
            icon: ActivityIcon::for_category(&record.category),
            date_label: format_date_label(&record.date),
            record,
        }
    }
}

/// Totals with pre-formatted labels ("11,650").
#[derive(Serialize, Clone, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TotalsView {
    #[serde(flatten)]
    pub totals: ActivityTotals,
    pub steps_label: String,
    pub calories_label: String,
}

impl From<ActivityTotals> for TotalsView {
    fn from(totals: ActivityTotals) -> Self {
        Self {
            steps_label: format_count(totals.total_steps),
            calories_label: format_count(totals.total_calories),
            totals,
        }
    }
}

// ─── Profile ─────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileResponse {
    pub profile: UserProfile,
    pub goal_options: Vec<FitnessGoal>,
}

async fn get_profile(State(state): State<Arc<AppState>>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        profile: state.profile.clone(),
        goal_options: FitnessGoal::ALL.to_vec(),
    })
}

// ─── Home ────────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HomeResponse {
    pub greeting: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub steps: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub step_goal: u64,
    pub step_progress: f32,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calories: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub calorie_goal: u64,
    pub calorie_progress: f32,
    pub calorie_percent: u32,
    pub current_activity: String,
    pub current_activity_icon: ActivityIcon,
}

async fn get_home(State(state): State<Arc<AppState>>) -> Json<HomeResponse> {
    let today = &state.today;
    let step_progress = goal_progress(today.steps, DAILY_STEP_GOAL);
    let calorie_progress = goal_progress(today.calories, DAILY_CALORIE_GOAL);

    Json(HomeResponse {
        greeting: format!("Welcome Back, {}!", state.profile.name),
        steps: today.steps,
        step_goal: DAILY_STEP_GOAL,
        step_progress,
        calories: today.calories,
        calorie_goal: DAILY_CALORIE_GOAL,
        calorie_progress,
        calorie_percent: progress_percent(calorie_progress),
        current_activity: today.current_activity.clone(),
        current_activity_icon: ActivityIcon::for_category(&today.current_activity),
    })
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub summary: TotalsView,
    pub activities: Vec<ActivityView>,
}

async fn get_activities(State(state): State<Arc<AppState>>) -> Json<ActivitiesResponse> {
    let records = state.source.list_records();

    Json(ActivitiesResponse {
        summary: summarize(records).into(),
        activities: records.iter().cloned().map(ActivityView::from).collect(),
    })
}

async fn get_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ActivityView>> {
    tracing::debug!(activity_id = id, "Fetching activity");

    let record = find_by_id(state.source.list_records(), id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Activity {} not found", id)))?;

    Ok(Json(record.into()))
}

// ─── History ─────────────────────────────────────────────────

/// Group ordering for the history view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Dates in the order the source first lists them
    #[default]
    Source,
    /// Most recent ISO date first
    Recent,
}

#[derive(Debug, Deserialize, Validate)]
struct HistoryQuery {
    /// Category selector; "All" when absent
    #[validate(length(min = 1, max = 32))]
    category: Option<String>,
    #[serde(default)]
    sort: HistoryOrder,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FilterChip {
    pub label: String,
    pub selected: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistoryGroup {
    pub date: String,
    pub label: String,
    pub summary: TotalsView,
    pub activities: Vec<ActivityView>,
}

impl From<DateGroup> for HistoryGroup {
    fn from(group: DateGroup) -> Self {
        let summary: TotalsView = group.totals().into();
        Self {
            label: format_date_label(&group.date),
            date: group.date,
            summary,
            activities: group
                .activities
                .into_iter()
                .map(ActivityView::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HistoryResponse {
    pub category: String,
    pub filters: Vec<FilterChip>,
    pub groups: Vec<HistoryGroup>,
}

async fn get_history(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<HistoryResponse>> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    params
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid 'category' parameter: {}", e)))?;

    let category = params
        .category
        .unwrap_or_else(|| ALL_CATEGORIES.to_string());

    tracing::debug!(category = %category, sort = ?params.sort, "Fetching history");

    let mut records = filter_by_category(state.source.list_records(), &category);
    if params.sort == HistoryOrder::Recent {
        sort_by_date_desc(&mut records);
    }

    let groups = group_by_date(&records)
        .into_groups()
        .into_iter()
        .map(HistoryGroup::from)
        .collect();

    let filters = FILTER_OPTIONS
        .iter()
        .map(|&label| FilterChip {
            label: label.to_string(),
            selected: label == category,
        })
        .collect();

    Ok(Json(HistoryResponse {
        category,
        filters,
        groups,
    }))
}
