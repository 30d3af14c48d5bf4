use argon2::{
    password_hash::{
        rand_core::OsRng,
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString
    },
    Argon2
};

use crate::errors::AuthError;

/// Hashes a plaintext admin password. Used by operators to produce the
/// `APP_ADMIN_PASSWORD_HASH` config value, and by tests.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(AuthError::from)
        .map(|hash| hash.to_string())
}

/// Verifies a plaintext password against a stored argon2 hash. A mismatch
/// maps to `AuthError::WrongCredentials`.
pub fn verify_password(password: &str, hashed: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hashed).map_err(AuthError::from)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(AuthError::from)
}
