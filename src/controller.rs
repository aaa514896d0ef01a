pub mod presentation;
pub mod staging;
