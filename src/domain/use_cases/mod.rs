pub mod photos;
pub mod auth;
pub mod extractors;
