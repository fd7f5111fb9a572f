// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Race-time prediction across the canonical distances.
//!
//! Each record is scaled to every target distance with Riegel's power law,
//! `t2 = t1 * (d2 / d1)^1.06`, and the scaled times are averaged without
//! weighting.

use crate::models::{CanonicalDistance, Record};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Riegel scaling exponent.
pub const RIEGEL_EXPONENT: f64 = 1.06;

/// Gap (seconds) under which a record counts as matching its prediction.
pub const ACCURATE_THRESHOLD_SECONDS: f64 = 5.0;

/// How an actual record compares to its prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ComparisonKind {
    /// Within the threshold either way
    Accurate,
    /// Actual record is faster than predicted
    Exceeded,
    /// Actual record is slower than predicted; room to improve
    Headroom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Comparison {
    pub kind: ComparisonKind,
    /// `actual - predicted`; negative means faster than predicted
    pub diff_seconds: f64,
}

/// Classify `diff = actual - predicted`.
///
/// `|diff| < 5` is accurate. Exactly ±5 falls outside that band and is
/// classified by sign.
pub fn classify(diff_seconds: f64) -> ComparisonKind {
    if diff_seconds.abs() < ACCURATE_THRESHOLD_SECONDS {
        ComparisonKind::Accurate
    } else if diff_seconds < 0.0 {
        ComparisonKind::Exceeded
    } else {
        ComparisonKind::Headroom
    }
}

/// Predicted time for one canonical distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub distance: CanonicalDistance,
    pub predicted_time_seconds: f64,
    pub has_actual_record: bool,
    pub actual_time_seconds: Option<f64>,
    pub comparison: Option<Comparison>,
}

/// Scale a record's time to `target` meters.
pub fn estimate(record: &Record, target_meters: f64) -> f64 {
    record.time_seconds * (target_meters / record.distance_meters).powf(RIEGEL_EXPONENT)
}

fn scales_finitely(record: &Record) -> bool {
    CanonicalDistance::ALL
        .iter()
        .all(|d| estimate(record, d.meters()).is_finite())
}

/// Predict every canonical distance from a user's records.
///
/// Records with a non-positive or non-finite distance or time are skipped,
/// as are records whose scaled time overflows at some canonical distance.
/// Returns an empty list when no usable record remains, otherwise one
/// prediction per distance in [`CanonicalDistance::ALL`] order.
///
/// When several records share a label, the fastest one is taken as the
/// actual record for that distance.
pub fn predict(records: &[Record]) -> Vec<Prediction> {
    let usable: Vec<&Record> = records
        .iter()
        .filter(|r| {
            let ok = r.is_usable() && scales_finitely(r);
            if !ok {
                tracing::warn!(
                    distance = %r.distance_label,
                    distance_meters = r.distance_meters,
                    time_seconds = r.time_seconds,
                    "Skipping record with invalid distance or time"
                );
            }
            ok
        })
        .collect();

    if usable.is_empty() {
        return Vec::new();
    }

    CanonicalDistance::ALL
        .into_iter()
        .map(|distance| {
            let target = distance.meters();
            // Divide before summing so large finite estimates cannot overflow
            let n = usable.len() as f64;
            let predicted = usable.iter().map(|r| estimate(r, target) / n).sum::<f64>();

            let actual = usable
                .iter()
                .filter(|r| r.distance_label == distance)
                .map(|r| r.time_seconds)
                .min_by(|a, b| a.total_cmp(b));

            let comparison = actual.map(|actual| {
                let diff_seconds = actual - predicted;
                Comparison {
                    kind: classify(diff_seconds),
                    diff_seconds,
                }
            });

            Prediction {
                distance,
                predicted_time_seconds: predicted,
                has_actual_record: actual.is_some(),
                actual_time_seconds: actual,
                comparison,
            }
        })
        .collect()
}
