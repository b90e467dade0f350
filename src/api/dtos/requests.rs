use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventSettingsRequest {
    pub event_date: String,
    pub event_name: String,
    pub location: String,
}

/// RSVP submissions arrive from a hand-written form; the lenient fields stay
/// raw JSON so intake can coerce them instead of bouncing the whole request.
#[derive(Deserialize)]
pub struct SubmitRsvpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guests_count: Option<Value>,
    pub guest_names: Option<Value>,
    pub message: Option<String>,
    pub will_attend: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub band_type: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
    // The dashboard sends this as a string; coerced in the handler.
    pub event_settings_id: Option<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUpdateVideosRequest {
    pub action: Option<String>,
    pub video_ids: Option<Vec<Value>>,
    pub band_type: Option<String>,
    pub is_active: Option<bool>,
}
