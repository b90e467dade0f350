use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{BatchUpdateVideosRequest, CreateVideoRequest};
use crate::api::dtos::responses::VideoResponse;
use crate::domain::models::video::{BandType, NewVideo};
use crate::domain::services::intake;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let include_inactive = params.get("includeInactive").map(String::as_str) == Some("true");

    let band_type = match params.get("bandType") {
        Some(raw) => Some(
            BandType::parse(raw).ok_or(AppError::Validation("Invalid band type".into()))?,
        ),
        None => None,
    };

    let videos = state.video_repo.list(include_inactive, band_type).await?;
    let mapped: Vec<VideoResponse> = videos.into_iter().map(VideoResponse::from).collect();

    Ok(Json(mapped))
}

pub async fn create_video(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateVideoRequest>,
) -> Result<impl IntoResponse, AppError> {
    let title = intake::clean_optional(payload.title.as_deref())
        .ok_or(AppError::Validation("Title and video URL are required".into()))?;
    let video_url = intake::clean_optional(payload.video_url.as_deref())
        .ok_or(AppError::Validation("Title and video URL are required".into()))?;

    let band_type = match payload.band_type.as_deref() {
        Some(raw) if !raw.trim().is_empty() => {
            BandType::parse(raw).ok_or(AppError::Validation("Invalid band type".into()))?
        }
        _ => BandType::default(),
    };

    let video = NewVideo {
        title,
        description: intake::clean_optional(payload.description.as_deref()),
        video_url,
        thumbnail_url: intake::clean_optional(payload.thumbnail_url.as_deref()),
        band_type,
        display_order: payload.display_order.unwrap_or(0),
        is_active: payload.is_active.unwrap_or(true),
        event_settings_id: payload.event_settings_id.as_ref().and_then(coerce_id),
    };

    let created = state.video_repo.create(&video).await?;
    info!("Video created: {} ({})", created.video.title, created.video.band_type.as_str());

    Ok((StatusCode::CREATED, Json(VideoResponse::from(created))))
}

pub async fn batch_update_videos(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BatchUpdateVideosRequest>,
) -> Result<impl IntoResponse, AppError> {
    let is_active = payload
        .is_active
        .ok_or(AppError::Validation("isActive is required".into()))?;

    match payload.action.as_deref() {
        Some("toggleActive") if payload.video_ids.is_some() => {
            let ids = payload
                .video_ids
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|v| coerce_id(v).ok_or(AppError::Validation("Invalid video id".into())))
                .collect::<Result<Vec<i64>, AppError>>()?;

            let updated = state.video_repo.set_active_by_ids(&ids, is_active).await?;
            info!("Batch video update: {} video(s) set active={}", updated, is_active);

            Ok(Json(serde_json::json!({
                "message": format!("{} video(s) updated", updated),
                "updatedVideos": updated,
            })))
        }
        Some("toggleBandType") if payload.band_type.is_some() => {
            let raw = payload.band_type.as_deref().unwrap_or_default();
            let band_type =
                BandType::parse(raw).ok_or(AppError::Validation("Invalid band type".into()))?;

            let count = state.video_repo.set_active_by_band(band_type, is_active).await?;
            info!("Batch video update: {} {} video(s) set active={}", count, band_type.as_str(), is_active);

            Ok(Json(serde_json::json!({
                "message": format!("{} {} video(s) updated", count, raw),
                "count": count,
            })))
        }
        _ => Err(AppError::Validation("Invalid action".into())),
    }
}

/// Ids arrive either as JSON numbers or decimal strings.
fn coerce_id(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}
