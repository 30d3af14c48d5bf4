use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{entities::token::Claims, errors::AuthError, AppState};

/// Extractor for admin claims, ensuring the caller presented a valid
/// admin bearer token.
/// Returns 401 if the token is missing or invalid, 403 if not an admin.
/// Usage: Add `admin: AdminClaims` as a parameter to your handler function.
#[derive(Debug)]
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => {
                tracing::error!("AppState missing in extractor");
                return ready(Err(AuthError::TokenCreation.into()));
            }
        };

        let token = match state.auth_handler.extract_token(req) {
            Some(token) => token,
            None => return ready(Err(AuthError::MissingCredentials.into())),
        };

        match state.auth_handler.decode_token(&token) {
            Ok(claims) if claims.admin => ready(Ok(AdminClaims(claims))),
            Ok(_) => ready(Err(AuthError::Forbidden("Admin access required".into()).into())),
            Err(e) => ready(Err(e.into())),
        }
    }
}
