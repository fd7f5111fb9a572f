// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Records backend API client.
//!
//! Handles:
//! - Login and registration
//! - Fetching a user's personal records
//! - Uploading activity files (multipart) for analysis
//!
//! Non-success replies are turned into [`AppError::Backend`] carrying the
//! backend's `detail` message, or a per-operation fallback when it sent none.

use crate::error::AppError;
use crate::models::{BackendUser, Credentials, Record, UploadSummary};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTER_FAILED: &str = "Could not create the account";
pub const RECORDS_FAILED: &str = "Could not load records";
pub const UPLOAD_FAILED: &str = "Could not process the file";

/// Records backend client.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /login`
    pub async fn login(&self, credentials: &Credentials) -> Result<BackendUser, AppError> {
        let url = format!("{}/login", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(connection_error)?;

        self.check_response_json(response, LOGIN_FAILED).await
    }

    /// `POST /register`
    pub async fn register(&self, credentials: &Credentials) -> Result<(), AppError> {
        let url = format!("{}/register", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(connection_error)?;

        self.check_response(response, REGISTER_FAILED).await?;
        Ok(())
    }

    /// `GET /records/{user_id}`
    pub async fn records(&self, user_id: u64) -> Result<Vec<Record>, AppError> {
        let url = format!("{}/records/{}", self.base_url, user_id);
        let response = self.http.get(&url).send().await.map_err(connection_error)?;

        self.check_response_json(response, RECORDS_FAILED).await
    }

    /// `POST /upload/{user_id}` with the file in the `file` part.
    pub async fn upload(
        &self,
        user_id: u64,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<UploadSummary, AppError> {
        let url = format!("{}/upload/{}", self.base_url, user_id);
        let part = reqwest::multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(connection_error)?;

        self.check_response_json(response, UPLOAD_FAILED).await
    }

    /// Check response status and return error if not successful.
    async fn check_response(
        &self,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<reqwest::Response, AppError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Err(AppError::Backend {
            status: status.as_u16(),
            detail: extract_detail(&body).unwrap_or_else(|| fallback.to_string()),
        })
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, AppError> {
        let response = self.check_response(response, fallback).await?;
        let url = response.url().to_string();

        response.json::<T>().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Malformed backend response");
            AppError::Backend {
                status: 502,
                detail: fallback.to_string(),
            }
        })
    }
}

fn connection_error(err: reqwest::Error) -> AppError {
    AppError::BackendUnavailable(err.to_string())
}

/// Pull a human-readable `detail` string out of an error body.
///
/// Validation errors carry a list rather than a string; those are ignored.
fn extract_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("detail")?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
