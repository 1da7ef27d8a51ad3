// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod stats;
pub mod user;

pub use activity::{ActivityIcon, ActivityRecord, ALL_CATEGORIES, FILTER_OPTIONS};
pub use stats::{ActivityTotals, DailyHistory, DateGroup, TodaySnapshot};
pub use user::{FitnessGoal, UserProfile};
