pub mod host;
pub mod platform;
