use axum::{extract::State, response::{Html, IntoResponse}};
use std::sync::Arc;

use crate::api::handlers::event_settings::get_or_create_settings;
use crate::error::AppError;
use crate::state::AppState;

/// The public invitation page. Renders with whatever settings are available,
/// including the hardcoded fallback when no database is configured.
pub async fn invitation_page(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let settings = get_or_create_settings(&state).await?;

    let mut context = tera::Context::new();
    context.insert("event_name", &settings.event_name);
    context.insert("event_date_iso", &settings.event_date.to_rfc3339());
    context.insert("event_date_display", &settings.event_date.format("%d/%m/%Y %H:%M").to_string());
    context.insert("location", &settings.location);

    let html = state
        .templates
        .render("invite.html", &context)
        .map_err(|_| AppError::Internal)?;

    Ok(Html(html))
}
