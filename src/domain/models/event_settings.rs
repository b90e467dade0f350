use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The singleton row describing the event. Conceptually id = 1; lookups
/// always take the first row and create it lazily if the table is empty.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventSettings {
    pub id: i64,
    pub event_name: String,
    pub event_date: DateTime<Utc>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
