pub mod entities;
pub mod use_cases;
pub mod data_uri;
pub mod capture;
