// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Result screen for an uploaded activity.

use crate::format::{format_improvement, format_minutes_seconds};
use crate::models::{CanonicalDistance, SessionRecord, UploadSummary};
use crate::views::chart::{chart_view, ChartView};
use crate::views::map::{map_view, MapView};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const FIRST_RECORD_NOTE: &str = "Your first record at this distance!";

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UploadView {
    pub stats: StatsView,
    /// Absent when the activity had no positions
    pub map: Option<MapView>,
    pub chart: ChartView,
    pub session_records: Vec<SessionRecordCard>,
}

/// Whole-activity figures, as formatted by the backend.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StatsView {
    pub duration: String,
    pub total_distance: String,
    pub mean_pace: String,
    pub elevation_gain: String,
}

/// Best segment of the session at one distance.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionRecordCard {
    pub distance: CanonicalDistance,
    pub time_seconds: f64,
    /// `m:ss`, minutes not wrapped into hours
    pub time: String,
    pub is_new_record: bool,
    /// Only set on new records
    pub note: Option<String>,
}

impl From<&SessionRecord> for SessionRecordCard {
    fn from(record: &SessionRecord) -> Self {
        let note = record.is_new_record.then(|| match record.improvement_seconds {
            Some(diff) if diff != 0.0 => format!("Improved by {}", format_improvement(diff)),
            _ => FIRST_RECORD_NOTE.to_string(),
        });

        Self {
            distance: record.distance_label,
            time_seconds: record.time_seconds,
            time: format_minutes_seconds(record.time_seconds),
            is_new_record: record.is_new_record,
            note,
        }
    }
}

pub fn upload_view(summary: &UploadSummary) -> UploadView {
    UploadView {
        stats: StatsView {
            duration: summary.stats.duration.clone(),
            total_distance: summary.stats.total_distance.clone(),
            mean_pace: summary.stats.mean_pace.clone(),
            elevation_gain: summary.stats.elevation_gain.clone(),
        },
        map: map_view(&summary.path),
        chart: chart_view(&summary.hrs, &summary.altitudes),
        session_records: summary
            .records
            .iter()
            .map(SessionRecordCard::from)
            .collect(),
    }
}
