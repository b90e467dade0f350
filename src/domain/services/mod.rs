pub mod defaults;
pub mod intake;
