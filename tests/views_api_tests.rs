// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Records, predictions and upload views served from the fake backend.

use axum::http::StatusCode;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_records_view_sorted_by_distance() {
    let (app, state, _) = common::create_test_app().await;
    let token = common::create_test_jwt(common::RUNNER_ID, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::authed_get("/api/records", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ready");

    let cards = json["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["distance"], "1km");
    assert_eq!(cards[0]["time"], "4:30");
    assert_eq!(cards[0]["pace"], "4:30 /km");
    assert_eq!(cards[1]["distance"], "5km");
    assert_eq!(cards[1]["time"], "25:00");
    assert_eq!(cards[1]["heart_rate"], "158 ppm");
    assert_eq!(cards[1]["elevation_gain"], "+12m");
    assert_eq!(cards[1]["date"], "2 Mar 2024");
}

#[tokio::test]
async fn test_predictions_view_has_card_per_distance() {
    let (app, state, _) = common::create_test_app().await;
    let token = common::create_test_jwt(common::RUNNER_ID, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::authed_get("/api/predictions", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ready");

    let cards = json["cards"].as_array().unwrap();
    let distances: Vec<&str> = cards
        .iter()
        .map(|c| c["distance"].as_str().unwrap())
        .collect();
    assert_eq!(
        distances,
        ["100m", "200m", "500m", "1km", "2km", "5km", "10km", "15km", "21km", "42km"]
    );

    let with_record: Vec<&str> = cards
        .iter()
        .filter(|c| c["badge"] == "current_record")
        .map(|c| c["distance"].as_str().unwrap())
        .collect();
    assert_eq!(with_record, ["1km", "5km"]);

    // 10km is the mean of both records scaled up
    let ten = &cards[6];
    let expected = (270.0 * 10f64.powf(1.06) + 1500.0 * 2f64.powf(1.06)) / 2.0;
    let predicted = ten["predicted_time_seconds"].as_f64().unwrap();
    assert!((predicted - expected).abs() < 1e-6);
    assert!(ten["actual"].is_null());

    let five = &cards[5];
    assert_eq!(five["actual"]["time"], "25:00");
    assert!(["accurate", "exceeded", "headroom"]
        .contains(&five["actual"]["comparison"].as_str().unwrap()));
}

#[tokio::test]
async fn test_empty_state_for_new_user() {
    let (app, state, _) = common::create_test_app().await;
    let token = common::create_test_jwt(common::NEWCOMER_ID, &state.config.jwt_signing_key);

    for uri in ["/api/records", "/api/predictions"] {
        let response = app
            .clone()
            .oneshot(common::authed_get(uri, &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = common::body_json(response).await;
        assert_eq!(json["status"], "empty", "{uri}");
        assert!(json["message"].as_str().unwrap().starts_with("Upload"));
    }
}

#[tokio::test]
async fn test_backend_failure_becomes_bad_gateway() {
    let (app, state, _) = common::create_test_app().await;
    let token = common::create_test_jwt(common::BROKEN_ID, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::authed_get("/api/records", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = common::body_json(response).await;
    assert_eq!(json["detail"], "Could not load records");
}

#[tokio::test]
async fn test_records_snapshot_shared_between_views() {
    let (app, state, backend) = common::create_test_app().await;
    let token = common::create_test_jwt(common::RUNNER_ID, &state.config.jwt_signing_key);

    for uri in ["/api/records", "/api/predictions", "/api/records"] {
        let response = app
            .clone()
            .oneshot(common::authed_get(uri, &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(backend.fetches(), 1);
}

#[tokio::test]
async fn test_upload_returns_result_screen_and_refreshes_records() {
    let (app, state, backend) = common::create_test_app().await;
    let token = common::create_test_jwt(common::RUNNER_ID, &state.config.jwt_signing_key);

    // Prime the snapshot
    let response = app
        .clone()
        .oneshot(common::authed_get("/api/records", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(backend.fetches(), 1);

    let response = app
        .clone()
        .oneshot(common::authed_upload(
            &token,
            "file",
            "Morning_Run.TCX",
            b"<TrainingCenterDatabase/>",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;

    assert_eq!(json["stats"]["duration"], "25:03");
    assert_eq!(json["stats"]["mean_pace"], "4:59 min/km");
    assert_eq!(json["map"]["center"], serde_json::json!([40.41, -3.70]));
    assert_eq!(json["map"]["zoom"], 13);
    assert_eq!(json["chart"]["labels"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["chart"]["datasets"][0]["yAxisID"], "y");

    let session = json["session_records"].as_array().unwrap();
    assert_eq!(session[0]["distance"], "1km");
    assert_eq!(session[0]["time"], "4:15");
    assert_eq!(session[0]["note"], "Improved by 15.0s");
    assert_eq!(session[1]["is_new_record"], false);
    assert!(session[1]["note"].is_null());

    {
        let uploads = backend.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].0, common::RUNNER_ID);
        assert_eq!(uploads[0].1, "Morning_Run.TCX");
    }

    // The new 1km record shows up straight away
    let response = app
        .oneshot(common::authed_get("/api/records", &token))
        .await
        .unwrap();
    assert_eq!(backend.fetches(), 2);
    let json = common::body_json(response).await;
    assert_eq!(json["cards"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_upload_rejects_other_formats() {
    let (app, state, backend) = common::create_test_app().await;
    let token = common::create_test_jwt(common::RUNNER_ID, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::authed_upload(&token, "file", "run.gpx", b"<gpx/>"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(
        json["detail"],
        "Invalid file format: only .tcx files are supported"
    );
    assert!(backend.uploads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let (app, state, _) = common::create_test_app().await;
    let token = common::create_test_jwt(common::RUNNER_ID, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::authed_upload(&token, "attachment", "run.tcx", b"<x/>"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["detail"], "No file selected");
}

#[tokio::test]
async fn test_upload_backend_rejection_keeps_detail() {
    let (app, state, backend) = common::create_test_app().await;
    let token = common::create_test_jwt(common::RUNNER_ID, &state.config.jwt_signing_key);

    let response = app
        .oneshot(common::authed_upload(&token, "file", "run.tcx", b"garbage"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["detail"], "Empty or corrupted file");
    assert!(backend.uploads.lock().unwrap().is_empty());
}
