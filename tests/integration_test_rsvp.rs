mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_submit_rsvp_full_flow() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "Ana Silva",
        "guests_count": 3,
        "guest_names": ["Bia", "Caio"]
    });
    let (status, body) = app.send("POST", "/api/v1/rsvp", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Ana Silva");
    assert_eq!(body["data"]["guestsCount"], 3);
    assert_eq!(body["data"]["guestNames"], json!(["Bia", "Caio"]));
    assert_eq!(body["data"]["willAttend"], true);
    assert!(body["data"]["id"].is_i64());

    let (status, body) = app.send("GET", "/api/v1/rsvp", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["stats"]["totalRSVPs"], 1);
    assert_eq!(body["stats"]["totalGuests"], 3);
}

#[tokio::test]
async fn test_guests_count_is_clamped_and_coerced() {
    let app = TestApp::new().await;

    for (input, expected) in [(json!(0), 1), (json!(500), 99), (json!("abc"), 1), (json!(null), 1)] {
        let payload = json!({ "name": "Convidado", "guests_count": input });
        let (status, body) = app.send("POST", "/api/v1/rsvp", Some(payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["guestsCount"], expected, "input was {:?}", body["data"]["guestsCount"]);
    }

    // Missing entirely defaults to 1.
    let (status, body) = app.send("POST", "/api/v1/rsvp", Some(json!({ "name": "Sozinho" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["guestsCount"], 1);
}

#[tokio::test]
async fn test_empty_name_is_rejected_without_side_effects() {
    let app = TestApp::new().await;

    for payload in [json!({}), json!({ "name": "" }), json!({ "name": "   " })] {
        let (status, _) = app.send("POST", "/api/v1/rsvp", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (_, body) = app.send("GET", "/api/v1/rsvp", None).await;
    assert_eq!(body["stats"]["totalRSVPs"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_optional_fields_are_trimmed_to_null() {
    let app = TestApp::new().await;

    let payload = json!({
        "name": "  Ana  ",
        "email": "   ",
        "phone": " 83 99999-0000 ",
        "message": ""
    });
    let (status, body) = app.send("POST", "/api/v1/rsvp", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Ana");
    assert_eq!(body["data"]["email"], json!(null));
    assert_eq!(body["data"]["phone"], "83 99999-0000");
    assert_eq!(body["data"]["message"], json!(null));
}

#[tokio::test]
async fn test_search_filters_and_stats_cover_the_same_set() {
    let app = TestApp::new().await;

    let entries = [
        json!({ "name": "Ana Silva", "email": "ana@example.com", "guests_count": 2 }),
        json!({ "name": "Bruno Costa", "phone": "83 98888-1111", "guests_count": 4 }),
        json!({ "name": "Carla Anapolis", "guests_count": 5, "will_attend": false }),
    ];
    for entry in entries {
        let (status, _) = app.send("POST", "/api/v1/rsvp", Some(entry)).await;
        assert_eq!(status, StatusCode::OK);
    }

    // Case-insensitive match against name; declined RSVPs never appear even
    // though "Anapolis" also matches.
    let (status, body) = app.send("GET", "/api/v1/rsvp?q=ANA", None).await;
    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Ana Silva");
    assert_eq!(body["stats"]["totalRSVPs"], 1);
    assert_eq!(body["stats"]["totalGuests"], 2);

    // Match against phone.
    let (_, body) = app.send("GET", "/api/v1/rsvp?q=98888", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["stats"]["totalGuests"], 4);

    // No term: all attending rows.
    let (_, body) = app.send("GET", "/api/v1/rsvp", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["stats"]["totalRSVPs"], 2);
    assert_eq!(body["stats"]["totalGuests"], 6);

    // No match: empty set, zeroed stats.
    let (_, body) = app.send("GET", "/api/v1/rsvp?q=zzz", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    assert_eq!(body["stats"]["totalRSVPs"], 0);
    assert_eq!(body["stats"]["totalGuests"], 0);
}

#[tokio::test]
async fn test_delete_rsvp_lifecycle() {
    let app = TestApp::new().await;

    let (_, body) = app.send("POST", "/api/v1/rsvp", Some(json!({ "name": "Ana" }))).await;
    let id = body["data"]["id"].as_i64().unwrap();

    // Non-numeric id.
    let (status, _) = app.send("DELETE", "/api/v1/rsvp/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown id.
    let (status, _) = app.send("DELETE", "/api/v1/rsvp/99999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Successful delete removes exactly one row.
    let (status, body) = app.send("DELETE", &format!("/api/v1/rsvp/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = app.send("GET", "/api/v1/rsvp", None).await;
    assert_eq!(body["stats"]["totalRSVPs"], 0);

    // Repeating the delete surfaces the absence.
    let (status, _) = app.send("DELETE", &format!("/api/v1/rsvp/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_export_returns_csv() {
    let app = TestApp::new().await;

    let payload = json!({ "name": "Ana \"Dedé\" Silva", "guests_count": 2, "message": "até lá!" });
    let (status, _) = app.send("POST", "/api/v1/rsvp", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let response = app.router.clone().oneshot(
        Request::builder()
            .uri("/api/v1/rsvp/export")
            .body(Body::empty())
            .unwrap(),
    ).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/csv"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.starts_with("Name,Email,Phone,Guests,Message,Confirmed At"));
    // Embedded quotes are doubled per CSV rules.
    assert!(csv.contains("\"Ana \"\"Dedé\"\" Silva\""));
}
