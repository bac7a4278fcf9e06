//! Axum extractor for the authorized principal

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::context::AuthContext;
use crate::error::AuthError;

/// The [`AuthContext`] left behind by the route's guard.
///
/// Only valid on routes mounted through [`crate::ProtectedRouterExt`] or
/// [`crate::protect`]; anywhere else it rejects with a server error.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthContext);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::error!(path = %parts.uri.path(), "Handler reached without an auth guard");
                AuthError::MissingContext
            })
    }
}
