//! Authentication and authorization errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Rejection produced by a pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing or malformed bearer credential")]
    MissingCredential,
    #[error("invalid or expired credential")]
    InvalidCredential,
    #[error("principal not found")]
    PrincipalNotFound,
    #[error("account disabled")]
    AccountDisabled,
    #[error("insufficient role")]
    InsufficientRole,
    #[error("principal store unavailable")]
    StoreUnavailable,
    #[error("token signing failed")]
    TokenSigning,
    /// A handler asked for the current user on a route with no guard.
    #[error("auth context missing")]
    MissingContext,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential
            | AuthError::InvalidCredential
            | AuthError::InsufficientRole => StatusCode::UNAUTHORIZED,
            AuthError::PrincipalNotFound => StatusCode::BAD_REQUEST,
            // Disabled accounts look like missing ones to a stale session
            AuthError::AccountDisabled => StatusCode::NOT_FOUND,
            AuthError::StoreUnavailable | AuthError::TokenSigning | AuthError::MissingContext => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "MISSING_CREDENTIAL",
            AuthError::InvalidCredential => "INVALID_CREDENTIAL",
            AuthError::PrincipalNotFound => "PRINCIPAL_NOT_FOUND",
            AuthError::AccountDisabled => "ACCOUNT_DISABLED",
            AuthError::InsufficientRole => "INSUFFICIENT_ROLE",
            AuthError::StoreUnavailable => "STORE_UNAVAILABLE",
            AuthError::TokenSigning => "TOKEN_SIGNING_FAILED",
            AuthError::MissingContext => "AUTH_CONTEXT_MISSING",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => "Authorization header with a Bearer token required",
            AuthError::InvalidCredential => "Invalid or expired token",
            AuthError::PrincipalNotFound => "User not found",
            AuthError::AccountDisabled => "User disabled account",
            AuthError::InsufficientRole => "User not authorized for this operation",
            AuthError::StoreUnavailable | AuthError::TokenSigning | AuthError::MissingContext => {
                "Internal server error"
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "msg": self.message(),
            "code": self.error_code(),
        }));

        (self.status_code(), body).into_response()
    }
}
