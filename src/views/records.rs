// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Personal-record cards.

use crate::format::{
    format_activity_date, format_elevation_gain, format_heart_rate, format_record_time,
    pace_per_km,
};
use crate::models::{CanonicalDistance, Record};
use crate::time_utils::format_utc_rfc3339;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const NO_RECORDS_MESSAGE: &str = "Upload a session to compute your first records";

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum RecordsView {
    Empty { message: String },
    Ready { cards: Vec<RecordCard> },
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecordCard {
    pub distance: CanonicalDistance,
    pub time_seconds: f64,
    /// e.g. `4:07` or `1h 5m 3s`
    pub time: String,
    /// e.g. `5:00 /km`; absent when the record has no usable distance
    pub pace: Option<String>,
    pub heart_rate: String,
    pub elevation_gain: String,
    pub date: String,
    /// RFC3339 activity start
    pub activity_date: String,
}

impl From<&Record> for RecordCard {
    fn from(record: &Record) -> Self {
        Self {
            distance: record.distance_label,
            time_seconds: record.time_seconds,
            time: format_record_time(record.time_seconds),
            pace: pace_per_km(record.time_seconds, record.distance_meters)
                .map(|pace| format!("{pace} /km")),
            heart_rate: format_heart_rate(record.mean_heart_rate),
            elevation_gain: format_elevation_gain(record.elevation_gain_meters),
            date: format_activity_date(record.activity_date),
            activity_date: format_utc_rfc3339(record.activity_date),
        }
    }
}

/// Record cards, shortest distance first.
pub fn records_view(records: &[Record]) -> RecordsView {
    if records.is_empty() {
        return RecordsView::Empty {
            message: NO_RECORDS_MESSAGE.to_string(),
        };
    }

    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));

    RecordsView::Ready {
        cards: sorted.into_iter().map(RecordCard::from).collect(),
    }
}
