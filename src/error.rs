// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Every error body carries a `detail` the page can show to the user as-is.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message shown when the records backend cannot be reached.
pub const BACKEND_UNREACHABLE: &str = "Could not connect to the server";

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The backend answered with a non-success status.
    #[error("Backend error (HTTP {status}): {detail}")]
    Backend { status: u16, detail: String },

    /// The backend could not be reached or sent an unreadable reply.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    detail: String,
}

impl AppError {
    /// HTTP status to answer with.
    ///
    /// Backend client errors (4xx) are passed through; anything else the
    /// backend does wrong is a bad gateway.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Backend { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(StatusCode::is_client_error)
                .unwrap_or(StatusCode::BAD_GATEWAY),
            AppError::BackendUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error, detail) = match &self {
            AppError::Unauthorized => ("unauthorized", "Please log in again".to_string()),
            AppError::InvalidToken => ("invalid_token", "Please log in again".to_string()),
            AppError::BadRequest(msg) => ("bad_request", msg.clone()),
            AppError::Backend { status, detail } => {
                tracing::warn!(status, detail = %detail, "Backend rejected request");
                ("backend_error", detail.clone())
            }
            AppError::BackendUnavailable(msg) => {
                tracing::error!(error = %msg, "Backend unavailable");
                ("backend_unavailable", BACKEND_UNREACHABLE.to_string())
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                ("internal_error", "Something went wrong".to_string())
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            detail,
        };

        (status, Json(body)).into_response()
    }
}

impl AppError {
    /// Turn form validation failures into a `BadRequest`.
    ///
    /// Fields are checked in `field_order` so the user always sees the
    /// message for the first field on the form that is wrong.
    pub fn from_validation(errors: &validator::ValidationErrors, field_order: &[&str]) -> Self {
        let field_errors = errors.field_errors();
        let message = field_order
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid input".to_string());
        AppError::BadRequest(message)
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
