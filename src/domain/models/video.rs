use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Closed set of promotional video categories. External input is normalized
/// at the API boundary; everything past the handlers carries this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "lowercase")]
pub enum BandType {
    Principal,
    Especial,
    Abertura,
    Encerramento,
}

impl BandType {
    /// Case-insensitive parse; `None` for anything outside the closed set.
    pub fn parse(input: &str) -> Option<BandType> {
        match input.trim().to_uppercase().as_str() {
            "PRINCIPAL" => Some(BandType::Principal),
            "ESPECIAL" => Some(BandType::Especial),
            "ABERTURA" => Some(BandType::Abertura),
            "ENCERRAMENTO" => Some(BandType::Encerramento),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BandType::Principal => "PRINCIPAL",
            BandType::Especial => "ESPECIAL",
            BandType::Abertura => "ABERTURA",
            BandType::Encerramento => "ENCERRAMENTO",
        }
    }
}

impl Default for BandType {
    fn default() -> Self {
        BandType::Principal
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub band_type: BandType,
    pub display_order: i32,
    pub is_active: bool,
    pub event_settings_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing row: the video plus the linked event's display fields, if any.
#[derive(Debug, FromRow, Clone)]
pub struct VideoWithEvent {
    #[sqlx(flatten)]
    pub video: Video,
    pub event_name: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub event_location: Option<String>,
}

/// A create request that already passed validation: title and video_url are
/// non-empty, band_type resolved against the closed set.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub band_type: BandType,
    pub display_order: i32,
    pub is_active: bool,
    pub event_settings_id: Option<i64>,
}
