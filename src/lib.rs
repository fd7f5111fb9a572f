// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! PR Analyzer: personal records and race predictions for runners
//!
//! This crate provides the view-model server behind the PR Analyzer web page.
//! It authenticates users against the records backend, fetches their personal
//! records and uploaded-activity summaries, and turns them into ready-to-render
//! views, including Riegel-based race-time predictions.

pub mod config;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod views;

use config::Config;
use services::{BackendClient, RecordsService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub records: RecordsService,
}

impl AppState {
    /// Build the state and its backend client from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let backend = BackendClient::new(&config.backend_url, config.backend_timeout)?;
        let records = RecordsService::new(backend, config.records_cache_ttl);
        Ok(Self { config, records })
    }
}
