//! In-memory stand-ins used when no DATABASE_URL is configured. Reads serve
//! the hardcoded defaults so the invitation page keeps rendering; writes are
//! rejected with a 503 instead of crashing.

use crate::domain::models::event_settings::EventSettings;
use crate::domain::models::rsvp::{NewRsvp, Rsvp, RsvpStats};
use crate::domain::models::video::{BandType, NewVideo, VideoWithEvent};
use crate::domain::ports::{EventSettingsRepository, RsvpRepository, VideoRepository};
use crate::domain::services::defaults;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

const NO_DATABASE: &str = "No database configured";

pub struct FallbackEventSettingsRepo;

#[async_trait]
impl EventSettingsRepository for FallbackEventSettingsRepo {
    async fn find_first(&self) -> Result<Option<EventSettings>, AppError> {
        Ok(Some(defaults::fallback_settings()))
    }

    async fn create(&self, _settings: &EventSettings) -> Result<EventSettings, AppError> {
        Err(AppError::Unavailable(NO_DATABASE.into()))
    }

    async fn upsert(&self, _event_date: DateTime<Utc>, _event_name: &str, _location: &str) -> Result<EventSettings, AppError> {
        Err(AppError::Unavailable(NO_DATABASE.into()))
    }
}

pub struct FallbackRsvpRepo;

#[async_trait]
impl RsvpRepository for FallbackRsvpRepo {
    async fn create(&self, _rsvp: &NewRsvp) -> Result<Rsvp, AppError> {
        Err(AppError::Unavailable(NO_DATABASE.into()))
    }

    async fn list_attending(&self, _q: Option<&str>) -> Result<Vec<Rsvp>, AppError> {
        Ok(Vec::new())
    }

    async fn stats(&self, _q: Option<&str>) -> Result<RsvpStats, AppError> {
        Ok(RsvpStats::empty())
    }

    async fn delete(&self, _id: i64) -> Result<(), AppError> {
        Err(AppError::Unavailable(NO_DATABASE.into()))
    }
}

pub struct FallbackVideoRepo;

#[async_trait]
impl VideoRepository for FallbackVideoRepo {
    async fn create(&self, _video: &NewVideo) -> Result<VideoWithEvent, AppError> {
        Err(AppError::Unavailable(NO_DATABASE.into()))
    }

    async fn list(&self, _include_inactive: bool, _band_type: Option<BandType>) -> Result<Vec<VideoWithEvent>, AppError> {
        Ok(Vec::new())
    }

    async fn set_active_by_ids(&self, _ids: &[i64], _is_active: bool) -> Result<u64, AppError> {
        Err(AppError::Unavailable(NO_DATABASE.into()))
    }

    async fn set_active_by_band(&self, _band_type: BandType, _is_active: bool) -> Result<u64, AppError> {
        Err(AppError::Unavailable(NO_DATABASE.into()))
    }
}
