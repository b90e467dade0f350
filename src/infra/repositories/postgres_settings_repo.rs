use crate::domain::{models::event_settings::EventSettings, ports::EventSettingsRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresEventSettingsRepo {
    pool: PgPool,
}

impl PostgresEventSettingsRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventSettingsRepository for PostgresEventSettingsRepo {
    async fn find_first(&self) -> Result<Option<EventSettings>, AppError> {
        sqlx::query_as::<_, EventSettings>(
            "SELECT id, event_name, event_date, location, created_at, updated_at FROM event_settings ORDER BY id LIMIT 1",
        )
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, settings: &EventSettings) -> Result<EventSettings, AppError> {
        sqlx::query_as::<_, EventSettings>(
            "INSERT INTO event_settings (id, event_name, event_date, location, created_at, updated_at) VALUES ($1, $2, $3, $4, $5, $6) RETURNING id, event_name, event_date, location, created_at, updated_at",
        )
            .bind(settings.id)
            .bind(&settings.event_name)
            .bind(settings.event_date)
            .bind(&settings.location)
            .bind(settings.created_at)
            .bind(settings.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn upsert(&self, event_date: DateTime<Utc>, event_name: &str, location: &str) -> Result<EventSettings, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, EventSettings>(
            "INSERT INTO event_settings (id, event_name, event_date, location, created_at, updated_at) VALUES (1, $1, $2, $3, $4, $4) \
             ON CONFLICT (id) DO UPDATE SET event_name = EXCLUDED.event_name, event_date = EXCLUDED.event_date, location = EXCLUDED.location, updated_at = EXCLUDED.updated_at \
             RETURNING id, event_name, event_date, location, created_at, updated_at",
        )
            .bind(event_name)
            .bind(event_date)
            .bind(location)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
