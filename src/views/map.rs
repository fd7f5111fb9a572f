// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route map data for an uploaded activity.

use geo::{BoundingRect, LineString};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Initial zoom before the map is fitted to the route bounds.
pub const DEFAULT_ZOOM: u8 = 13;
/// Encoded polyline precision (5 digits, the common web-map default).
pub const POLYLINE_PRECISION: u32 = 5;
pub const ROUTE_COLOR: &str = "#00d2ff";
pub const ROUTE_WEIGHT: u8 = 5;

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RouteStyle {
    pub color: String,
    pub weight: u8,
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MapView {
    /// First track point as `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    /// `[[south, west], [north, east]]`
    pub bounds: [[f64; 2]; 2],
    /// Encoded polyline of the whole track
    pub polyline: Option<String>,
    /// Track as a GeoJSON `Feature` with a `LineString` geometry
    #[cfg_attr(feature = "binding-generation", ts(type = "unknown"))]
    pub route: geojson::Feature,
    pub style: RouteStyle,
}

/// Build the map view for a `[lat, lon]` track.
///
/// Returns `None` for an empty track; there is nothing to center on.
pub fn map_view(path: &[[f64; 2]]) -> Option<MapView> {
    let first = *path.first()?;

    // geo works in (x, y) = (lon, lat)
    let line: LineString<f64> = path
        .iter()
        .map(|[lat, lon]| (*lon, *lat))
        .collect::<Vec<_>>()
        .into();
    let rect = line.bounding_rect()?;

    let polyline = match polyline::encode_coordinates(line.clone(), POLYLINE_PRECISION) {
        Ok(encoded) => Some(encoded),
        Err(e) => {
            tracing::warn!(error = %e, points = path.len(), "Could not encode route polyline");
            None
        }
    };

    let route = geojson::Feature::from(geojson::Geometry::new(geojson::Value::from(&line)));

    Some(MapView {
        center: first,
        zoom: DEFAULT_ZOOM,
        bounds: [
            [rect.min().y, rect.min().x],
            [rect.max().y, rect.max().x],
        ],
        polyline,
        route,
        style: RouteStyle {
            color: ROUTE_COLOR.to_string(),
            weight: ROUTE_WEIGHT,
        },
    })
}
