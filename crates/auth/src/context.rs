//! Per-request authorization context

use uuid::Uuid;

use crate::claims::VerifiedClaim;
use crate::operation::Operation;
use crate::types::{Principal, Role};

/// Result of a successful pass through the pipeline.
///
/// Built once per request and handed to the handler; never mutated.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claim: VerifiedClaim,
    pub principal: Principal,
    pub operation: Operation,
}

impl AuthContext {
    pub fn new(claim: VerifiedClaim, principal: Principal, operation: Operation) -> Self {
        Self {
            claim,
            principal,
            operation,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.principal.id
    }

    /// Authoritative role (from the store, not the token)
    pub fn role(&self) -> Role {
        self.principal.role
    }

    pub fn is_admin(&self) -> bool {
        self.principal.is_admin()
    }

    /// True when the caller owns a resource belonging to `owner_id`
    pub fn owns(&self, owner_id: Uuid) -> bool {
        self.principal.id == owner_id
    }
}
