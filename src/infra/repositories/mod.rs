pub mod fallback;
pub mod postgres_rsvp_repo;
pub mod postgres_settings_repo;
pub mod postgres_video_repo;
pub mod sqlite_rsvp_repo;
pub mod sqlite_settings_repo;
pub mod sqlite_video_repo;
