//! Credential hashing shared across Mural crates
//!
//! Passwords are stored as Argon2id PHC strings
//! (`$argon2id$v=19$...$salt$hash`), so the salt travels with the hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::Error;

/// Hash a plaintext credential with a fresh random salt.
pub fn hash_credential(secret: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Internal(format!("Failed to hash credential: {}", e)))
}

/// Verify a plaintext credential against a stored PHC hash.
///
/// A malformed stored hash never verifies.
pub fn verify_credential(candidate: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "Stored credential hash is malformed");
            return false;
        }
    };

    Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed)
        .is_ok()
}
