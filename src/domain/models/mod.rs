pub mod event_settings;
pub mod rsvp;
pub mod video;
