//! Principal resolution

use std::sync::Arc;

use crate::claims::VerifiedClaim;
use crate::error::AuthError;
use crate::store::{PrincipalStore, StoreError};
use crate::types::Principal;

/// Second stage: one store lookup by the claim's subject.
///
/// A valid token does not prove the account still exists, so this runs on
/// every protected request.
#[derive(Clone)]
pub struct PrincipalResolutionStage {
    store: Arc<dyn PrincipalStore>,
}

impl PrincipalResolutionStage {
    pub fn new(store: Arc<dyn PrincipalStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, claim: &VerifiedClaim) -> Result<Principal, AuthError> {
        let subject = claim.subject;

        match self.store.find_principal(subject).await {
            Ok(Some(principal)) => Ok(principal),
            Ok(None) => {
                tracing::warn!(user_id = %subject, "Token subject has no matching user");
                Err(AuthError::PrincipalNotFound)
            }
            Err(StoreError::Corrupt(detail)) => {
                tracing::error!(user_id = %subject, error = %detail, "Corrupt user record");
                Err(AuthError::StoreUnavailable)
            }
            Err(StoreError::Unavailable(detail)) => {
                tracing::error!(user_id = %subject, error = %detail, "Failed to load user");
                Err(AuthError::StoreUnavailable)
            }
        }
    }
}
