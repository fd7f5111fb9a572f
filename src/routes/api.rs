// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::views::{
    predictions_view, records_view, upload_view, PredictionsView, RecordsView, UploadView,
};
use crate::AppState;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Multipart field holding the activity file.
const UPLOAD_FIELD: &str = "file";
const ACCEPTED_EXTENSION: &str = ".tcx";

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes(max_upload_bytes: usize) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/records", get(get_records))
        .route("/api/predictions", get(get_predictions))
        .route(
            "/api/upload",
            post(upload_activity).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
}

// ─── User Profile ────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MeResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub username: String,
}

async fn get_me(Extension(user): Extension<AuthUser>) -> Json<MeResponse> {
    Json(MeResponse {
        id: user.user_id,
        username: user.username,
    })
}

// ─── Records & Predictions ───────────────────────────────────

async fn get_records(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<RecordsView>> {
    let records = state.records.snapshot(user.user_id).await?;
    Ok(Json(records_view(&records)))
}

async fn get_predictions(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<PredictionsView>> {
    let records = state.records.snapshot(user.user_id).await?;
    tracing::debug!(
        user_id = user.user_id,
        records = records.len(),
        "Computing predictions"
    );
    Ok(Json(predictions_view(&records)))
}

// ─── Upload ──────────────────────────────────────────────────

/// Forward an activity file to the backend and build the result screen.
async fn upload_activity(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    mut multipart: Multipart,
) -> Result<Json<UploadView>> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        upload = Some((file_name, content));
        break;
    }

    let (file_name, content) =
        upload.ok_or_else(|| AppError::BadRequest("No file selected".to_string()))?;

    if !file_name.to_lowercase().ends_with(ACCEPTED_EXTENSION) {
        return Err(AppError::BadRequest(
            "Invalid file format: only .tcx files are supported".to_string(),
        ));
    }
    if content.is_empty() {
        return Err(AppError::BadRequest("Empty or corrupted file".to_string()));
    }

    tracing::info!(
        user_id = user.user_id,
        file_name = %file_name,
        bytes = content.len(),
        "Uploading activity"
    );

    let summary = state
        .records
        .upload(user.user_id, &file_name, content.to_vec())
        .await?;

    Ok(Json(upload_view(&summary)))
}
