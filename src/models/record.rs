// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Personal records and upload results as returned by the records backend.
//!
//! The backend speaks Spanish field names on the wire; they are mapped onto
//! English names here and never leak past this module.

use crate::models::CanonicalDistance;
use crate::time_utils::deserialize_backend_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's best time for one canonical distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Backend row ID
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "distancia_nombre")]
    pub distance_label: CanonicalDistance,
    #[serde(rename = "distancia_metros")]
    pub distance_meters: f64,
    #[serde(rename = "tiempo_segundos")]
    pub time_seconds: f64,
    #[serde(rename = "pulsaciones_medias", default)]
    pub mean_heart_rate: Option<u32>,
    #[serde(rename = "desnivel_positivo", default)]
    pub elevation_gain_meters: f64,
    /// Start of the activity the record was taken from
    #[serde(
        rename = "fecha_actividad",
        deserialize_with = "deserialize_backend_timestamp"
    )]
    pub activity_date: DateTime<Utc>,
    #[serde(rename = "velocidad_media_kmh", default)]
    pub mean_speed_kmh: Option<f64>,
    /// Name of the uploaded file the record came from
    #[serde(rename = "nombre_archivo", default)]
    pub file_name: Option<String>,
}

impl Record {
    /// Whether the record can take part in predictions.
    ///
    /// Distance and time must both be finite and strictly positive.
    pub fn is_usable(&self) -> bool {
        self.distance_meters.is_finite()
            && self.distance_meters > 0.0
            && self.time_seconds.is_finite()
            && self.time_seconds > 0.0
    }
}

/// Best segment found for one distance in a freshly uploaded activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "distancia_nombre")]
    pub distance_label: CanonicalDistance,
    #[serde(rename = "tiempo_segundos")]
    pub time_seconds: f64,
    #[serde(rename = "velocidad_media_kmh", default)]
    pub mean_speed_kmh: f64,
    #[serde(rename = "pulsaciones_medias", default)]
    pub mean_heart_rate: Option<u32>,
    #[serde(rename = "desnivel_positivo", default)]
    pub elevation_gain_meters: f64,
    /// Whether this segment beat (or created) the stored record
    #[serde(rename = "es_nuevo_record", default)]
    pub is_new_record: bool,
    /// Seconds improved over the previous record, if there was one
    #[serde(rename = "diferencia_con_anterior", default)]
    pub improvement_seconds: Option<f64>,
}

/// Whole-activity figures, already formatted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    #[serde(rename = "tiempo")]
    pub duration: String,
    #[serde(rename = "distancia_total")]
    pub total_distance: String,
    #[serde(rename = "ritmo_medio")]
    pub mean_pace: String,
    #[serde(rename = "desnivel")]
    pub elevation_gain: String,
}

/// Response of `POST /upload/{user_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    #[serde(rename = "stats_globales")]
    pub stats: GlobalStats,
    /// Track as `[lat, lon]` pairs
    #[serde(default)]
    pub path: Vec<[f64; 2]>,
    /// Heart-rate samples (bpm), only points that had one
    #[serde(default)]
    pub hrs: Vec<u32>,
    /// Altitude samples (meters), one per track point
    #[serde(default)]
    pub altitudes: Vec<f64>,
    #[serde(default)]
    pub records: Vec<SessionRecord>,
}
