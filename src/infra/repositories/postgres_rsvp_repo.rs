use crate::domain::{
    models::rsvp::{NewRsvp, Rsvp, RsvpStats},
    ports::RsvpRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;

const RSVP_COLUMNS: &str = "id, name, email, phone, guests_count, guest_names, message, will_attend, created_at, updated_at";

pub struct PostgresRsvpRepo {
    pool: PgPool,
}

impl PostgresRsvpRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PostgresRsvpRepo {
    async fn create(&self, rsvp: &NewRsvp) -> Result<Rsvp, AppError> {
        let now = Utc::now();
        sqlx::query_as::<_, Rsvp>(
            &format!(
                "INSERT INTO rsvps (name, email, phone, guests_count, guest_names, message, will_attend, created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) RETURNING {RSVP_COLUMNS}"
            ),
        )
            .bind(&rsvp.name)
            .bind(&rsvp.email)
            .bind(&rsvp.phone)
            .bind(rsvp.guests_count)
            .bind(Json(&rsvp.guest_names))
            .bind(&rsvp.message)
            .bind(rsvp.will_attend)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_attending(&self, q: Option<&str>) -> Result<Vec<Rsvp>, AppError> {
        match q {
            Some(q) => {
                let pattern = format!("%{}%", q);
                sqlx::query_as::<_, Rsvp>(
                    &format!(
                        "SELECT {RSVP_COLUMNS} FROM rsvps \
                         WHERE will_attend = TRUE AND (name ILIKE $1 OR email ILIKE $1 OR phone ILIKE $1) \
                         ORDER BY created_at DESC"
                    ),
                )
                    .bind(&pattern)
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            None => {
                sqlx::query_as::<_, Rsvp>(
                    &format!("SELECT {RSVP_COLUMNS} FROM rsvps WHERE will_attend = TRUE ORDER BY created_at DESC"),
                )
                    .fetch_all(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn stats(&self, q: Option<&str>) -> Result<RsvpStats, AppError> {
        // Same predicate as list_attending, so the aggregates always describe
        // exactly the rows the listing returned.
        match q {
            Some(q) => {
                let pattern = format!("%{}%", q);
                sqlx::query_as::<_, RsvpStats>(
                    "SELECT COUNT(*) AS total_rsvps, COALESCE(SUM(guests_count), 0) AS total_guests FROM rsvps \
                     WHERE will_attend = TRUE AND (name ILIKE $1 OR email ILIKE $1 OR phone ILIKE $1)",
                )
                    .bind(&pattern)
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
            None => {
                sqlx::query_as::<_, RsvpStats>(
                    "SELECT COUNT(*) AS total_rsvps, COALESCE(SUM(guests_count), 0) AS total_guests FROM rsvps WHERE will_attend = TRUE",
                )
                    .fetch_one(&self.pool)
                    .await
                    .map_err(AppError::Database)
            }
        }
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM rsvps WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("RSVP not found".into()));
        }
        Ok(())
    }
}
