use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guests_count: i32,
    pub guest_names: Json<Vec<String>>,
    pub message: Option<String>,
    pub will_attend: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A submission that already passed intake normalization: name is trimmed
/// and non-empty, guests_count is within [1, 99].
#[derive(Debug, Clone)]
pub struct NewRsvp {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub guests_count: i32,
    pub guest_names: Vec<String>,
    pub message: Option<String>,
    pub will_attend: bool,
}

/// Aggregates computed over the same filtered set as the listing.
#[derive(Debug, Serialize, FromRow, Clone, Copy)]
pub struct RsvpStats {
    #[serde(rename = "totalRSVPs")]
    pub total_rsvps: i64,
    #[serde(rename = "totalGuests")]
    pub total_guests: i64,
}

impl RsvpStats {
    pub fn empty() -> Self {
        Self { total_rsvps: 0, total_guests: 0 }
    }
}
