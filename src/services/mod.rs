// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod source;

pub use aggregator::{filter_by_category, find_by_id, group_by_date, CategoryFilter};
pub use source::{ActivitySource, FixtureExtras, SourceError, StaticActivitySource};
