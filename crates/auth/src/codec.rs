//! Signed access tokens (HS256 JWT)

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::{timestamp, TokenClaims, VerifiedClaim};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::types::Role;

/// Encodes and decodes principal tokens.
///
/// Keys and validation rules are derived once from [`AuthConfig`] and never
/// change afterwards.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: Option<String>,
    audience: Option<String>,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expired means expired; no clock tolerance
        validation.leeway = 0;

        if let Some(aud) = &config.audience {
            validation.set_audience(&[aud]);
        } else {
            validation.validate_aud = false;
        }

        if let Some(iss) = &config.issuer {
            validation.set_issuer(&[iss]);
        }

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            ttl: config.token_ttl,
        }
    }

    /// Mint a token for `subject`, valid for the configured TTL from `now`.
    pub fn issue(
        &self,
        subject: Uuid,
        role: Option<Role>,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let iat = u64::try_from(now.timestamp()).unwrap_or(0);
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat,
            exp: iat.saturating_add(self.ttl.as_secs()),
            role,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, subject = %subject, "Failed to sign token");
            AuthError::TokenSigning
        })
    }

    /// Check signature, expiry and (when configured) issuer/audience.
    pub fn decode(&self, token: &str) -> Result<VerifiedClaim, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                tracing::debug!(error = %e, "Token validation failed");
                AuthError::InvalidCredential
            },
        )?;

        let claims = data.claims;
        let subject = Uuid::parse_str(&claims.sub).map_err(|_| {
            tracing::debug!("Token subject is not a valid identifier");
            AuthError::InvalidCredential
        })?;

        Ok(VerifiedClaim {
            subject,
            issued_at: timestamp(claims.iat),
            expires_at: timestamp(claims.exp),
            advisory_role: claims.role,
        })
    }
}
