// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display formatting for times, paces and record stats.
//!
//! Every split into hours/minutes/seconds floors; nothing here rounds up.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Whole hours, minutes (0-59) and seconds (0-59) of a duration.
fn split_hms(seconds: f64) -> (u64, u64, u64) {
    let total = seconds.max(0.0).floor() as u64;
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Clock-style duration: `h:mm:ss`, `m:ss`, or `0:ss` under a minute.
pub fn format_clock(seconds: f64) -> String {
    match split_hms(seconds) {
        (h, m, s) if h > 0 => format!("{h}:{m:02}:{s:02}"),
        (_, m, s) => format!("{m}:{s:02}"),
    }
}

/// Record-card duration: `1h 5m 3s`, `4:07`, or `38s`.
pub fn format_record_time(seconds: f64) -> String {
    match split_hms(seconds) {
        (h, m, s) if h > 0 => format!("{h}h {m}m {s}s"),
        (_, m, s) if m > 0 => format!("{m}:{s:02}"),
        (_, _, s) => format!("{s}s"),
    }
}

/// `m:ss` with minutes never wrapped into hours (`75:00` for 4500s).
pub fn format_minutes_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Pace in minutes per kilometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Pace {
    pub minutes: u64,
    pub seconds: u64,
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Pace for covering `distance_meters` in `time_seconds`.
///
/// Returns `None` when the distance is not positive or the result is not
/// finite.
pub fn pace_per_km(time_seconds: f64, distance_meters: f64) -> Option<Pace> {
    if distance_meters <= 0.0 {
        return None;
    }
    let minutes_per_km = time_seconds / (distance_meters / 1000.0) / 60.0;
    if !minutes_per_km.is_finite() || minutes_per_km < 0.0 {
        return None;
    }
    let minutes = minutes_per_km.floor();
    let seconds = ((minutes_per_km - minutes) * 60.0).floor();
    Some(Pace {
        minutes: minutes as u64,
        seconds: seconds as u64,
    })
}

/// Average heart rate; a missing or zero reading shows as `N/A`.
pub fn format_heart_rate(bpm: Option<u32>) -> String {
    match bpm {
        Some(bpm) if bpm > 0 => format!("{bpm} ppm"),
        _ => "N/A ppm".to_string(),
    }
}

pub fn format_elevation_gain(meters: f64) -> String {
    format!("+{}m", meters.round() as i64)
}

/// Short date, e.g. `15 Jan 2024`.
pub fn format_activity_date(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}

/// Whole-second gap, sign dropped (`12s`).
pub fn format_seconds_delta(seconds: f64) -> String {
    format!("{:.0}s", seconds.abs())
}

/// Improvement over a previous record to a tenth of a second (`3.5s`).
pub fn format_improvement(seconds: f64) -> String {
    format!("{seconds:.1}s")
}
