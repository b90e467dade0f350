//! Behavior without DATABASE_URL: reads keep the invitation functional with
//! hardcoded data, writes answer 503.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use invite_backend::{
    api::router::create_router,
    config::Config,
    infra::factory::load_templates,
    infra::repositories::fallback::{FallbackEventSettingsRepo, FallbackRsvpRepo, FallbackVideoRepo},
    state::AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn degraded_router() -> Router {
    let state = Arc::new(AppState {
        config: Config { database_url: None, port: 0 },
        settings_repo: Arc::new(FallbackEventSettingsRepo),
        rsvp_repo: Arc::new(FallbackRsvpRepo),
        video_repo: Arc::new(FallbackVideoRepo),
        templates: load_templates(),
    });
    create_router(state)
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_reads_serve_fallback_payloads() {
    let router = degraded_router();

    let (status, body) = send(&router, "GET", "/api/v1/event-settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["eventName"], "Aniversário de Dedé Sales");

    let (status, body) = send(&router, "GET", "/api/v1/rsvp", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["stats"]["totalRSVPs"], 0);
    assert_eq!(body["stats"]["totalGuests"], 0);

    let (status, body) = send(&router, "GET", "/api/v1/videos", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    // The invitation page still renders.
    let (status, _) = send(&router, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_writes_return_service_unavailable() {
    let router = degraded_router();

    let (status, _) = send(&router, "POST", "/api/v1/rsvp", Some(json!({ "name": "Ana" }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let payload = json!({
        "eventDate": "2026-02-14T18:00:00-03:00",
        "eventName": "Festa",
        "location": "Conde - PB"
    });
    let (status, _) = send(&router, "POST", "/api/v1/event-settings", Some(payload)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let payload = json!({ "title": "V", "videoUrl": "https://v/x" });
    let (status, _) = send(&router, "POST", "/api/v1/videos", Some(payload)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = send(&router, "DELETE", "/api/v1/rsvp/1", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // Validation still runs before the store is touched.
    let (status, _) = send(&router, "POST", "/api/v1/rsvp", Some(json!({ "name": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
