use crate::domain::models::video::VideoWithEvent;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Video row in the shape the frontend expects: string id, lowercase band
/// type, `order` instead of `displayOrder`, linked event fields inlined.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub band_type: String,
    pub is_active: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub event_settings: Option<VideoEventInfo>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEventInfo {
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
}

impl From<VideoWithEvent> for VideoResponse {
    fn from(row: VideoWithEvent) -> Self {
        let event_settings = match (row.event_name, row.event_date, row.event_location) {
            (Some(event_name), Some(event_date), Some(location)) => Some(VideoEventInfo {
                event_name,
                event_date,
                location,
            }),
            _ => None,
        };

        Self {
            id: row.video.id.to_string(),
            title: row.video.title,
            description: row.video.description,
            video_url: row.video.video_url,
            thumbnail_url: row.video.thumbnail_url,
            band_type: row.video.band_type.as_str().to_lowercase(),
            is_active: row.video.is_active,
            order: row.video.display_order,
            created_at: row.video.created_at,
            updated_at: row.video.updated_at,
            event_settings,
        }
    }
}
