pub mod photo;
pub mod token;
