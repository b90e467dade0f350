use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::SubmitRsvpRequest;
use crate::domain::models::rsvp::NewRsvp;
use crate::domain::services::intake;
use crate::error::AppError;
use crate::state::AppState;

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SubmitRsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = intake::clean_optional(payload.name.as_deref())
        .ok_or(AppError::Validation("Name is required".into()))?;

    let rsvp = NewRsvp {
        name,
        email: intake::clean_optional(payload.email.as_deref()),
        phone: intake::clean_optional(payload.phone.as_deref()),
        guests_count: intake::coerce_guests_count(payload.guests_count.as_ref()),
        guest_names: intake::coerce_guest_names(payload.guest_names.as_ref()),
        message: intake::clean_optional(payload.message.as_deref()),
        will_attend: payload.will_attend != Some(false),
    };

    let created = state.rsvp_repo.create(&rsvp).await?;
    info!("RSVP saved: {} ({} guests)", created.name, created.guests_count);

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "RSVP confirmed successfully",
        "data": created,
    })))
}

pub async fn list_rsvps(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let q = params.get("q").map(|s| s.trim()).filter(|s| !s.is_empty());

    let rsvps = state.rsvp_repo.list_attending(q).await?;
    let stats = state.rsvp_repo.stats(q).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": rsvps,
        "stats": stats,
    })))
}

pub async fn delete_rsvp(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::Validation("Invalid RSVP id".into()))?;

    state.rsvp_repo.delete(id).await?;
    info!("RSVP deleted: {}", id);

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "RSVP removed successfully",
    })))
}

/// CSV dump of attending RSVPs for the admin dashboard.
pub async fn export_rsvps(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rsvps = state.rsvp_repo.list_attending(None).await?;

    let mut csv = String::from("Name,Email,Phone,Guests,Message,Confirmed At\n");
    for rsvp in &rsvps {
        let row = [
            rsvp.name.clone(),
            rsvp.email.clone().unwrap_or_default(),
            rsvp.phone.clone().unwrap_or_default(),
            rsvp.guests_count.to_string(),
            rsvp.message.clone().unwrap_or_default(),
            rsvp.created_at.to_rfc3339(),
        ];
        let quoted: Vec<String> = row
            .iter()
            .map(|field| format!("\"{}\"", field.replace('"', "\"\"")))
            .collect();
        csv.push_str(&quoted.join(","));
        csv.push('\n');
    }

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"rsvps.csv\""),
        ],
        csv,
    ))
}
