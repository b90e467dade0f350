use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{event_settings, health, page, rsvp, video};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page::invitation_page))
        .route("/health", get(health::health_check))

        // Event settings (singleton)
        .route("/api/v1/event-settings", get(event_settings::get_settings).post(event_settings::update_settings))

        // RSVP
        .route("/api/v1/rsvp", post(rsvp::submit_rsvp).get(rsvp::list_rsvps))
        .route("/api/v1/rsvp/export", get(rsvp::export_rsvps))
        .route("/api/v1/rsvp/{id}", delete(rsvp::delete_rsvp))

        // Video catalog
        .route("/api/v1/videos", get(video::list_videos).post(video::create_video).put(video::batch_update_videos))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
