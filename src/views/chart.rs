// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Heart-rate / altitude line chart data.
//!
//! Field names follow what line-chart libraries expect (`borderColor`,
//! `yAxisID`, ...), so the page can hand the datasets over unchanged.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const HEART_RATE_COLOR: &str = "#f87171";
pub const HEART_RATE_FILL: &str = "rgba(248, 113, 113, 0.1)";
pub const ALTITUDE_COLOR: &str = "#94a3b8";

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChartView {
    /// Sample index for each point on the x axis
    pub labels: Vec<usize>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u8>>,
    pub fill: bool,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: String,
    pub point_radius: u8,
    pub border_width: u8,
}

/// Two-axis chart: heart rate on `y`, altitude on `y1`.
///
/// The x axis spans the longer of the two series; heart rate is often
/// shorter because points without a reading are dropped upstream.
pub fn chart_view(heart_rates: &[u32], altitudes: &[f64]) -> ChartView {
    let points = heart_rates.len().max(altitudes.len());

    ChartView {
        labels: (0..points).collect(),
        datasets: vec![
            ChartDataset {
                label: "Heart rate (ppm)".to_string(),
                data: heart_rates.iter().map(|&hr| f64::from(hr)).collect(),
                border_color: HEART_RATE_COLOR.to_string(),
                background_color: Some(HEART_RATE_FILL.to_string()),
                border_dash: None,
                fill: true,
                y_axis_id: "y".to_string(),
                point_radius: 0,
                border_width: 2,
            },
            ChartDataset {
                label: "Altitude (m)".to_string(),
                data: altitudes.to_vec(),
                border_color: ALTITUDE_COLOR.to_string(),
                background_color: None,
                border_dash: Some(vec![5, 5]),
                fill: false,
                y_axis_id: "y1".to_string(),
                point_radius: 0,
                border_width: 1,
            },
        ],
    }
}
