// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test harness: an in-process fake records backend plus helpers to
//! build the app against it.

use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{TimeZone, Utc};
use pr_analyzer::config::Config;
use pr_analyzer::middleware::auth::create_jwt;
use pr_analyzer::models::{
    BackendUser, CanonicalDistance, Credentials, GlobalStats, Record, SessionRecord,
    UploadSummary,
};
use pr_analyzer::routes::create_router;
use pr_analyzer::AppState;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// User with two records (1km and 5km).
pub const RUNNER_ID: u64 = 1;
/// User with no records yet.
pub const NEWCOMER_ID: u64 = 2;
/// User whose records request makes the backend fail.
pub const BROKEN_ID: u64 = 99;

pub const RUNNER_NAME: &str = "ana";
pub const RUNNER_PASSWORD: &str = "secret1";

/// Observable state of the fake backend.
#[derive(Default)]
pub struct FakeBackend {
    pub record_fetches: AtomicUsize,
    pub uploads: Mutex<Vec<(u64, String, usize)>>,
    pub registered: Mutex<Vec<String>>,
    records: Mutex<HashMap<u64, Vec<Record>>>,
}

impl FakeBackend {
    pub fn fetches(&self) -> usize {
        self.record_fetches.load(Ordering::SeqCst)
    }
}

pub fn record(distance: CanonicalDistance, time_seconds: f64) -> Record {
    Record {
        id: None,
        distance_label: distance,
        distance_meters: distance.meters(),
        time_seconds,
        mean_heart_rate: Some(158),
        elevation_gain_meters: 12.0,
        activity_date: Utc.with_ymd_and_hms(2024, 3, 2, 8, 15, 0).unwrap(),
        mean_speed_kmh: None,
        file_name: Some("morning.tcx".to_string()),
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn fake_login(Json(credentials): Json<Credentials>) -> Response {
    if credentials.username == RUNNER_NAME && credentials.password == RUNNER_PASSWORD {
        Json(BackendUser {
            id: RUNNER_ID,
            username: RUNNER_NAME.to_string(),
        })
        .into_response()
    } else {
        detail(StatusCode::UNAUTHORIZED, "Wrong username or password")
    }
}

async fn fake_register(
    State(backend): State<Arc<FakeBackend>>,
    Json(credentials): Json<Credentials>,
) -> Response {
    if credentials.username == "taken" {
        return detail(StatusCode::BAD_REQUEST, "Username already in use");
    }
    backend
        .registered
        .lock()
        .unwrap()
        .push(credentials.username.clone());
    Json(json!({ "id": 3, "username": credentials.username })).into_response()
}

async fn fake_records(
    State(backend): State<Arc<FakeBackend>>,
    Path(user_id): Path<u64>,
) -> Response {
    backend.record_fetches.fetch_add(1, Ordering::SeqCst);
    if user_id == BROKEN_ID {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    let records = backend
        .records
        .lock()
        .unwrap()
        .get(&user_id)
        .cloned()
        .unwrap_or_default();
    Json(records).into_response()
}

async fn fake_upload(
    State(backend): State<Arc<FakeBackend>>,
    Path(user_id): Path<u64>,
    mut multipart: Multipart,
) -> Response {
    let Some(field) = multipart.next_field().await.unwrap() else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "file missing");
    };
    let file_name = field.file_name().unwrap_or_default().to_string();
    let content = field.bytes().await.unwrap();

    if content.starts_with(b"garbage") {
        return detail(StatusCode::BAD_REQUEST, "Empty or corrupted file");
    }

    backend
        .uploads
        .lock()
        .unwrap()
        .push((user_id, file_name, content.len()));

    // The upload sets a new 1km record
    backend
        .records
        .lock()
        .unwrap()
        .entry(user_id)
        .or_default()
        .push(record(CanonicalDistance::K1, 255.0));

    Json(UploadSummary {
        stats: GlobalStats {
            duration: "25:03".to_string(),
            total_distance: "5.02 km".to_string(),
            mean_pace: "4:59 min/km".to_string(),
            elevation_gain: "31 m".to_string(),
        },
        path: vec![[40.41, -3.70], [40.42, -3.71], [40.43, -3.69]],
        hrs: vec![148, 152, 157],
        altitudes: vec![650.0, 652.5, 651.0],
        records: vec![
            SessionRecord {
                distance_label: CanonicalDistance::K1,
                time_seconds: 255.0,
                mean_speed_kmh: 14.1,
                mean_heart_rate: Some(162),
                elevation_gain_meters: 2.0,
                is_new_record: true,
                improvement_seconds: Some(15.0),
            },
            SessionRecord {
                distance_label: CanonicalDistance::K5,
                time_seconds: 1503.0,
                mean_speed_kmh: 11.9,
                mean_heart_rate: Some(158),
                elevation_gain_meters: 31.0,
                is_new_record: false,
                improvement_seconds: None,
            },
        ],
    })
    .into_response()
}

/// Start the fake backend on an ephemeral port and return its base URL.
pub async fn spawn_fake_backend() -> (String, Arc<FakeBackend>) {
    let backend = Arc::new(FakeBackend::default());
    backend.records.lock().unwrap().insert(
        RUNNER_ID,
        vec![
            record(CanonicalDistance::K5, 1500.0),
            record(CanonicalDistance::K1, 270.0),
        ],
    );

    let app = Router::new()
        .route("/login", post(fake_login))
        .route("/register", post(fake_register))
        .route("/records/{user_id}", get(fake_records))
        .route("/upload/{user_id}", post(fake_upload))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), backend)
}

/// Create the app wired to a fresh fake backend.
#[allow(dead_code)]
pub async fn create_test_app() -> (Router, Arc<AppState>, Arc<FakeBackend>) {
    let (backend_url, backend) = spawn_fake_backend().await;
    let config = Config {
        backend_url,
        ..Config::test_default()
    };
    let state = Arc::new(AppState::new(config).unwrap());
    (create_router(state.clone()), state, backend)
}

/// Create the app pointed at a backend that is not listening.
#[allow(dead_code)]
pub fn create_offline_app() -> (Router, Arc<AppState>) {
    let config = Config {
        backend_url: "http://127.0.0.1:9".to_string(),
        ..Config::test_default()
    };
    let state = Arc::new(AppState::new(config).unwrap());
    (create_router(state.clone()), state)
}

#[allow(dead_code)]
pub fn create_test_jwt(user_id: u64, signing_key: &[u8]) -> String {
    create_jwt(user_id, "tester", signing_key).unwrap()
}

/// Authenticated GET request.
#[allow(dead_code)]
pub fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Authenticated multipart upload of a single file field.
#[allow(dead_code)]
pub fn authed_upload(token: &str, field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    let boundary = "pr-analyzer-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// JSON POST request.
#[allow(dead_code)]
pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
