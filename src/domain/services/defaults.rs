use crate::domain::models::event_settings::EventSettings;
use chrono::{DateTime, Utc};

pub const DEFAULT_EVENT_NAME: &str = "Aniversário de Dedé Sales";
pub const DEFAULT_EVENT_LOCATION: &str = "Praia de Jacumã, Conde - PB";
pub const DEFAULT_EVENT_DATE: &str = "2025-11-01T16:30:00-03:00";

pub fn default_event_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(DEFAULT_EVENT_DATE)
        .expect("default event date is a valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// The record served when the table is empty or no database is configured.
pub fn fallback_settings() -> EventSettings {
    let now = Utc::now();
    EventSettings {
        id: 1,
        event_name: DEFAULT_EVENT_NAME.to_string(),
        event_date: default_event_date(),
        location: DEFAULT_EVENT_LOCATION.to_string(),
        created_at: now,
        updated_at: now,
    }
}
