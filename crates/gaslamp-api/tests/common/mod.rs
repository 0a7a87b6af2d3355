//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gaslamp_api::routes;
use gaslamp_api::state::AppState;
use gaslamp_core::clock::Clock;
use gaslamp_core::generator::{ImageGenerator, TextGenerator};
use gaslamp_core::store::CaseRepository;
use gaslamp_test_support::FixedClock;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router with the same route structure as `main.rs`,
/// over deterministic stand-ins for the store and the generators.
pub fn build_test_app(
    cases: Arc<dyn CaseRepository>,
    narrative: Arc<dyn TextGenerator>,
    analytic: Arc<dyn TextGenerator>,
) -> Router {
    build_test_app_with_illustrator(cases, narrative, analytic, None)
}

/// Like [`build_test_app`], for tests that exercise scene illustration.
pub fn build_test_app_with_illustrator(
    cases: Arc<dyn CaseRepository>,
    narrative: Arc<dyn TextGenerator>,
    analytic: Arc<dyn TextGenerator>,
    illustrator: Option<Arc<dyn ImageGenerator>>,
) -> Router {
    let app_state = AppState::new(fixed_clock(), cases, narrative, analytic, illustrator);
    routes::app_router().with_state(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
