use crate::domain::models::{
    event_settings::EventSettings,
    rsvp::{NewRsvp, Rsvp, RsvpStats},
    video::{BandType, NewVideo, VideoWithEvent},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait EventSettingsRepository: Send + Sync {
    async fn find_first(&self) -> Result<Option<EventSettings>, AppError>;
    async fn create(&self, settings: &EventSettings) -> Result<EventSettings, AppError>;
    /// Create-or-replace of the singleton row (id = 1), last-writer-wins.
    async fn upsert(&self, event_date: DateTime<Utc>, event_name: &str, location: &str) -> Result<EventSettings, AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn create(&self, rsvp: &NewRsvp) -> Result<Rsvp, AppError>;
    /// Attending RSVPs, newest first, optionally filtered by a
    /// case-insensitive substring match against name, email or phone.
    async fn list_attending(&self, q: Option<&str>) -> Result<Vec<Rsvp>, AppError>;
    /// Aggregates over exactly the set `list_attending` would return for `q`.
    async fn stats(&self, q: Option<&str>) -> Result<RsvpStats, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create(&self, video: &NewVideo) -> Result<VideoWithEvent, AppError>;
    async fn list(&self, include_inactive: bool, band_type: Option<BandType>) -> Result<Vec<VideoWithEvent>, AppError>;
    async fn set_active_by_ids(&self, ids: &[i64], is_active: bool) -> Result<u64, AppError>;
    async fn set_active_by_band(&self, band_type: BandType, is_active: bool) -> Result<u64, AppError>;
}
