pub mod handlers;
pub mod repositories;
