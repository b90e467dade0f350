use crate::domain::{
    models::video::{BandType, NewVideo, VideoWithEvent},
    ports::VideoRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

const VIDEO_SELECT: &str = "SELECT v.id, v.title, v.description, v.video_url, v.thumbnail_url, v.band_type, v.display_order, v.is_active, v.event_settings_id, v.created_at, v.updated_at, \
     e.event_name AS event_name, e.event_date AS event_date, e.location AS event_location \
     FROM videos v LEFT JOIN event_settings e ON e.id = v.event_settings_id";

pub struct PostgresVideoRepo {
    pool: PgPool,
}

impl PostgresVideoRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_with_event(&self, id: i64) -> Result<VideoWithEvent, AppError> {
        sqlx::query_as::<_, VideoWithEvent>(&format!("{VIDEO_SELECT} WHERE v.id = $1"))
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepo {
    async fn create(&self, video: &NewVideo) -> Result<VideoWithEvent, AppError> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO videos (title, description, video_url, thumbnail_url, band_type, display_order, is_active, event_settings_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) RETURNING id",
        )
            .bind(&video.title)
            .bind(&video.description)
            .bind(&video.video_url)
            .bind(&video.thumbnail_url)
            .bind(video.band_type)
            .bind(video.display_order)
            .bind(video.is_active)
            .bind(video.event_settings_id)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.find_with_event(id).await
    }

    async fn list(&self, include_inactive: bool, band_type: Option<BandType>) -> Result<Vec<VideoWithEvent>, AppError> {
        let mut sql = String::from(VIDEO_SELECT);
        let mut clauses: Vec<&str> = Vec::new();
        if !include_inactive {
            clauses.push("v.is_active = TRUE");
        }
        if band_type.is_some() {
            clauses.push("v.band_type = $1");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY v.display_order ASC, v.created_at DESC");

        let mut query = sqlx::query_as::<_, VideoWithEvent>(&sql);
        if let Some(bt) = band_type {
            query = query.bind(bt);
        }

        query.fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn set_active_by_ids(&self, ids: &[i64], is_active: bool) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE videos SET is_active = $1, updated_at = $2 WHERE id = ANY($3)")
            .bind(is_active)
            .bind(Utc::now())
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }

    async fn set_active_by_band(&self, band_type: BandType, is_active: bool) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE videos SET is_active = $1, updated_at = $2 WHERE band_type = $3")
            .bind(is_active)
            .bind(Utc::now())
            .bind(band_type)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
