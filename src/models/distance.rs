// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Canonical race distances.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One of the fixed race distances records and predictions are computed for.
///
/// Serialized as its label (`"5km"`), which is also the backend's
/// `distancia_nombre` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum CanonicalDistance {
    #[serde(rename = "100m")]
    M100,
    #[serde(rename = "200m")]
    M200,
    #[serde(rename = "500m")]
    M500,
    #[serde(rename = "1km")]
    K1,
    #[serde(rename = "2km")]
    K2,
    #[serde(rename = "5km")]
    K5,
    #[serde(rename = "10km")]
    K10,
    #[serde(rename = "15km")]
    K15,
    #[serde(rename = "21km")]
    HalfMarathon,
    #[serde(rename = "42km")]
    Marathon,
}

impl CanonicalDistance {
    /// All canonical distances, shortest first.
    pub const ALL: [CanonicalDistance; 10] = [
        CanonicalDistance::M100,
        CanonicalDistance::M200,
        CanonicalDistance::M500,
        CanonicalDistance::K1,
        CanonicalDistance::K2,
        CanonicalDistance::K5,
        CanonicalDistance::K10,
        CanonicalDistance::K15,
        CanonicalDistance::HalfMarathon,
        CanonicalDistance::Marathon,
    ];

    /// Label used on the wire and on cards.
    pub fn label(self) -> &'static str {
        match self {
            CanonicalDistance::M100 => "100m",
            CanonicalDistance::M200 => "200m",
            CanonicalDistance::M500 => "500m",
            CanonicalDistance::K1 => "1km",
            CanonicalDistance::K2 => "2km",
            CanonicalDistance::K5 => "5km",
            CanonicalDistance::K10 => "10km",
            CanonicalDistance::K15 => "15km",
            CanonicalDistance::HalfMarathon => "21km",
            CanonicalDistance::Marathon => "42km",
        }
    }

    /// Exact length in meters.
    pub fn meters(self) -> f64 {
        match self {
            CanonicalDistance::M100 => 100.0,
            CanonicalDistance::M200 => 200.0,
            CanonicalDistance::M500 => 500.0,
            CanonicalDistance::K1 => 1_000.0,
            CanonicalDistance::K2 => 2_000.0,
            CanonicalDistance::K5 => 5_000.0,
            CanonicalDistance::K10 => 10_000.0,
            CanonicalDistance::K15 => 15_000.0,
            CanonicalDistance::HalfMarathon => 21_097.0,
            CanonicalDistance::Marathon => 42_195.0,
        }
    }
}

impl fmt::Display for CanonicalDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown distance label: {0}")]
pub struct UnknownDistance(pub String);

impl FromStr for CanonicalDistance {
    type Err = UnknownDistance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalDistance::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| UnknownDistance(s.to_string()))
    }
}
