pub mod event_settings;
pub mod health;
pub mod page;
pub mod rsvp;
pub mod video;
