mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_get_settings_creates_default_when_absent() {
    let app = TestApp::new().await;

    let (status, body) = app.send("GET", "/api/v1/event-settings", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["eventName"], "Aniversário de Dedé Sales");
    assert_eq!(body["data"]["location"], "Praia de Jacumã, Conde - PB");

    // Second read returns the same row, no duplicate creation.
    let (status, body) = app.send("GET", "/api/v1/event-settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
}

#[tokio::test]
async fn test_upsert_settings_then_read_back() {
    let app = TestApp::new().await;

    let payload = json!({
        "eventDate": "2026-02-14T18:00:00-03:00",
        "eventName": "Festa da Lua",
        "location": "Recife - PE"
    });
    let (status, body) = app.send("POST", "/api/v1/event-settings", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["eventName"], "Festa da Lua");

    let (status, body) = app.send("GET", "/api/v1/event-settings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["eventName"], "Festa da Lua");
    assert_eq!(body["data"]["location"], "Recife - PE");
    // Stored as UTC.
    assert_eq!(body["data"]["eventDate"], "2026-02-14T21:00:00Z");
}

#[tokio::test]
async fn test_upsert_is_idempotent_on_the_singleton_row() {
    let app = TestApp::new().await;

    for name in ["Primeira", "Segunda"] {
        let payload = json!({
            "eventDate": "2026-02-14T18:00:00-03:00",
            "eventName": name,
            "location": "Conde - PB"
        });
        let (status, _) = app.send("POST", "/api/v1/event-settings", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
    }

    // Last writer wins, still exactly one row.
    let (_, body) = app.send("GET", "/api/v1/event-settings", None).await;
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["eventName"], "Segunda");
}

#[tokio::test]
async fn test_upsert_rejects_invalid_date() {
    let app = TestApp::new().await;

    let payload = json!({
        "eventDate": "not-a-date",
        "eventName": "Festa",
        "location": "Conde - PB"
    });
    let (status, _) = app.send("POST", "/api/v1/event-settings", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invitation_page_renders() {
    let app = TestApp::new().await;

    let (status, _) = app.send("GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
}
