use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::UpdateEventSettingsRequest;
use crate::domain::models::event_settings::EventSettings;
use crate::domain::services::defaults;
use crate::error::AppError;
use crate::state::AppState;

/// First read creates the singleton row with the hardcoded defaults, so the
/// endpoint never answers empty.
pub async fn get_or_create_settings(state: &AppState) -> Result<EventSettings, AppError> {
    if let Some(settings) = state.settings_repo.find_first().await? {
        return Ok(settings);
    }

    info!("No event settings found, creating default record");
    state.settings_repo.create(&defaults::fallback_settings()).await
}

pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let settings = get_or_create_settings(&state).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": settings,
    })))
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateEventSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event_date: DateTime<Utc> = DateTime::parse_from_rfc3339(payload.event_date.trim())
        .map_err(|_| AppError::Validation("eventDate must be a valid RFC 3339 timestamp".into()))?
        .with_timezone(&Utc);

    let settings = state
        .settings_repo
        .upsert(event_date, payload.event_name.trim(), payload.location.trim())
        .await?;

    info!("Event settings updated: {} at {}", settings.event_name, settings.event_date);

    Ok(Json(serde_json::json!({
        "success": true,
        "data": settings,
    })))
}
