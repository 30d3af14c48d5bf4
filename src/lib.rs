mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{capture, data_uri, entities, use_cases};
pub use interfaces::{handlers, repositories};
pub use infrastructure::auth;

use auth::jwt::JwtService;
use repositories::photo::MemoryPhotoStore;
use settings::AppConfig;
use use_cases::{auth::AuthHandler, photos::PhotoHandler};

pub struct AppState {
    pub photo_handler: AppPhotoHandler,
    pub auth_handler: AuthHandler,
}

pub type AppPhotoHandler = PhotoHandler<MemoryPhotoStore>;

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let jwt_service = JwtService::new(config);
        let photo_store = MemoryPhotoStore::new();

        AppState {
            photo_handler: PhotoHandler::new(photo_store),
            auth_handler: AuthHandler::new(config.admin_password_hash.clone(), jwt_service),
        }
    }
}
