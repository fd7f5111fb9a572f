// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View models: ready-to-render JSON for each screen of the web page.

pub mod chart;
pub mod map;
pub mod predictions;
pub mod records;
pub mod upload;

pub use chart::{chart_view, ChartDataset, ChartView};
pub use map::{map_view, MapView};
pub use predictions::{predictions_view, PredictionCard, PredictionsView};
pub use records::{records_view, RecordCard, RecordsView};
pub use upload::{upload_view, SessionRecordCard, UploadView};
