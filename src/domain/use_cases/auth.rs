use actix_web::HttpRequest;

use crate::{
    auth::{jwt::JwtService, password::verify_password},
    entities::token::{AdminLogin, AuthResponse, Claims},
    errors::AuthError,
};

/// Server-side replacement for the old client-side password comparison:
/// the credential is verified against an argon2 hash and exchanged for a
/// short-lived bearer token.
pub struct AuthHandler {
    admin_password_hash: String,
    jwt_service: JwtService,
}

impl AuthHandler {
    pub fn new(admin_password_hash: String, jwt_service: JwtService) -> Self {
        AuthHandler {
            admin_password_hash,
            jwt_service,
        }
    }

    pub fn login(&self, request: AdminLogin) -> Result<AuthResponse, AuthError> {
        verify_password(&request.password, &self.admin_password_hash)?;

        let access_token = self.jwt_service.create_jwt()?;

        Ok(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
        })
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.jwt_service.decode_jwt(token)?.claims)
    }

    pub fn extract_token(&self, request: &HttpRequest) -> Option<String> {
        request
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.to_string())
    }
}
