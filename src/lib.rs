// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! PocketFit: activity history, daily totals and profile data
//!
//! This crate groups and filters logged activities and serves the results
//! as JSON for the app's screens.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use models::{TodaySnapshot, UserProfile};
use services::source::{ActivitySource, SourceError, StaticActivitySource};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn ActivitySource>,
    pub profile: UserProfile,
    pub today: TodaySnapshot,
}

impl AppState {
    /// Build state with the given source and the sample profile.
    pub fn new(config: Config, source: Arc<dyn ActivitySource>) -> Self {
        Self {
            config,
            source,
            profile: UserProfile::default(),
            today: TodaySnapshot::default(),
        }
    }

    /// Build state from configuration, loading the fixture file if one is set.
    pub fn from_config(config: Config) -> Result<Self, SourceError> {
        let Some(path) = config.fixture_path.clone() else {
            tracing::info!("Using built-in sample activities");
            return Ok(Self::new(config, Arc::new(StaticActivitySource::sample())));
        };

        tracing::info!(path = %path.display(), "Loading activity fixture");
        let (source, extras) = StaticActivitySource::load_from_file(&path)?;

        let mut state = Self::new(config, Arc::new(source));
        if let Some(profile) = extras.profile {
            state.profile = profile;
        }
        if let Some(today) = extras.today {
            state.today = today;
        }
        Ok(state)
    }
}
