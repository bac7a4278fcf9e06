//! Bearer token extraction and verification

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::claims::VerifiedClaim;
use crate::codec::TokenCodec;
use crate::error::AuthError;

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// Absent header, non-ASCII value, other schemes and empty tokens are all
/// `MissingCredential`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;

    let header = header
        .to_str()
        .map_err(|_| AuthError::MissingCredential)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredential)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(token)
}

/// First stage: headers in, verified claim out.
#[derive(Clone)]
pub struct TokenVerificationStage {
    codec: Arc<TokenCodec>,
}

impl TokenVerificationStage {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    pub fn verify(&self, headers: &HeaderMap) -> Result<VerifiedClaim, AuthError> {
        let token = extract_bearer_token(headers)?;
        self.codec.decode(token)
    }
}
