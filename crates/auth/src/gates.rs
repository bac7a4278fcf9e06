//! Policy gates applied after the principal is resolved

use crate::error::AuthError;
use crate::operation::Operation;
use crate::types::{Principal, Role};

/// Rejects inactive principals except on the reactivation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountStateGate {
    exempt: Operation,
}

impl AccountStateGate {
    pub fn new() -> Self {
        Self {
            exempt: Operation::ACCOUNT_REACTIVATION,
        }
    }

    pub fn exempt_operation(&self) -> Operation {
        self.exempt
    }

    pub fn check(&self, principal: &Principal, operation: Operation) -> Result<(), AuthError> {
        if principal.active || operation == self.exempt {
            return Ok(());
        }

        tracing::info!(
            user_id = %principal.id,
            operation = %operation,
            "Rejected request from disabled account"
        );
        Err(AuthError::AccountDisabled)
    }
}

impl Default for AccountStateGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects principals that do not hold `required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGate {
    required: Role,
}

impl RoleGate {
    pub fn new(required: Role) -> Self {
        Self { required }
    }

    pub fn required(&self) -> Role {
        self.required
    }

    pub fn check(&self, principal: &Principal) -> Result<(), AuthError> {
        if principal.role == self.required {
            return Ok(());
        }

        tracing::info!(
            user_id = %principal.id,
            role = %principal.role,
            required = %self.required,
            "Rejected request with insufficient role"
        );
        Err(AuthError::InsufficientRole)
    }
}
