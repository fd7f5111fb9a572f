// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration and logout.
//!
//! Credentials are checked by the records backend; a successful login is
//! turned into a signed session cookie that gates the `/api` routes.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, SESSION_COOKIE, SESSION_TTL_SECS};
use crate::models::{LoginRequest, RegisterRequest};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub username: String,
    /// Same token as the cookie, for clients that send `Authorization`
    pub token: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RegisterResponse {
    pub message: String,
    pub username: String,
}

/// Session cookie; `Secure` only when the frontend is served over HTTPS.
fn session_cookie(config: &Config, token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.frontend_url.starts_with("https://"))
        .max_age(time::Duration::seconds(SESSION_TTL_SECS as i64))
        .build()
}

/// Check credentials with the backend and open a session.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(form): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>)> {
    let form = form.trimmed();
    form.validate()
        .map_err(|e| AppError::from_validation(&e, &["username", "password"]))?;

    let user = state.records.backend().login(&form.credentials()).await?;

    let token = create_jwt(user.id, &user.username, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(user_id = user.id, "User logged in");

    let jar = jar.add(session_cookie(&state.config, token.clone()));
    Ok((
        jar,
        Json(LoginResponse {
            id: user.id,
            username: user.username,
            token,
        }),
    ))
}

/// Create an account. The user still has to log in afterwards.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let form = form.trimmed();
    form.validate().map_err(|e| {
        AppError::from_validation(&e, &["username", "password", "password_confirm"])
    })?;

    state.records.backend().register(&form.credentials()).await?;

    tracing::info!(username = %form.username, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account created. You can now log in.".to_string(),
            username: form.username,
        }),
    ))
}

/// Drop the session cookie.
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}
