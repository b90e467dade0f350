use std::sync::Arc;
use crate::domain::ports::{EventSettingsRepository, RsvpRepository, VideoRepository};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub settings_repo: Arc<dyn EventSettingsRepository>,
    pub rsvp_repo: Arc<dyn RsvpRepository>,
    pub video_repo: Arc<dyn VideoRepository>,
    pub templates: Arc<Tera>,
}
