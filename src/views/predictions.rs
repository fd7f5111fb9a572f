// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Prediction cards, one per canonical distance.

use crate::format::{format_clock, format_seconds_delta, pace_per_km};
use crate::models::{CanonicalDistance, Record};
use crate::services::prediction::{predict, ComparisonKind, Prediction};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const NO_PREDICTIONS_MESSAGE: &str = "Upload at least one session to generate predictions";

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum PredictionsView {
    Empty { message: String },
    Ready { cards: Vec<PredictionCard> },
}

/// Whether the card shows an achieved record or a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Badge {
    CurrentRecord,
    Target,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PredictionCard {
    pub distance: CanonicalDistance,
    pub predicted_time_seconds: f64,
    /// e.g. `52:07`
    pub predicted_time: String,
    /// e.g. `5:12 min/km`
    pub pace: String,
    pub badge: Badge,
    pub actual: Option<ActualRecord>,
}

/// The user's real record for the card's distance.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActualRecord {
    pub time_seconds: f64,
    pub time: String,
    pub comparison: ComparisonKind,
    /// `actual - predicted`
    pub diff_seconds: f64,
    pub message: String,
}

fn comparison_message(kind: ComparisonKind, diff_seconds: f64) -> String {
    match kind {
        ComparisonKind::Accurate => "Very accurate prediction".to_string(),
        ComparisonKind::Exceeded => format!(
            "You're {} faster than the prediction!",
            format_seconds_delta(diff_seconds)
        ),
        ComparisonKind::Headroom => format!(
            "Improvement potential: {} faster",
            format_seconds_delta(diff_seconds)
        ),
    }
}

impl From<&Prediction> for PredictionCard {
    fn from(prediction: &Prediction) -> Self {
        let pace = pace_per_km(prediction.predicted_time_seconds, prediction.distance.meters())
            .map(|pace| format!("{pace} min/km"))
            .unwrap_or_default();

        let actual = prediction
            .actual_time_seconds
            .zip(prediction.comparison)
            .map(|(time_seconds, comparison)| ActualRecord {
                time_seconds,
                time: format_clock(time_seconds),
                comparison: comparison.kind,
                diff_seconds: comparison.diff_seconds,
                message: comparison_message(comparison.kind, comparison.diff_seconds),
            });

        Self {
            distance: prediction.distance,
            predicted_time_seconds: prediction.predicted_time_seconds,
            predicted_time: format_clock(prediction.predicted_time_seconds),
            pace,
            badge: if prediction.has_actual_record {
                Badge::CurrentRecord
            } else {
                Badge::Target
            },
            actual,
        }
    }
}

/// Prediction grid for a user's records.
///
/// No records (or none usable) gives the empty state rather than a grid.
pub fn predictions_view(records: &[Record]) -> PredictionsView {
    let predictions = if records.is_empty() {
        Vec::new()
    } else {
        predict(records)
    };

    if predictions.is_empty() {
        return PredictionsView::Empty {
            message: NO_PREDICTIONS_MESSAGE.to_string(),
        };
    }

    PredictionsView::Ready {
        cards: predictions.iter().map(PredictionCard::from).collect(),
    }
}
