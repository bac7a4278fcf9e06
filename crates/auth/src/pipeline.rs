//! Pipeline composition
//!
//! `AuthPipeline` owns the shared stages. `AuthPipeline::guard` binds them to
//! one [`Operation`] at router-construction time, producing an
//! [`OperationGuard`] whose stage list is fixed:
//!
//! verify token -> resolve principal -> account state -> [role]
//!
//! The first failing stage ends the request.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::codec::TokenCodec;
use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::gates::{AccountStateGate, RoleGate};
use crate::operation::Operation;
use crate::resolution::PrincipalResolutionStage;
use crate::store::PrincipalStore;
use crate::types::Role;
use crate::verification::TokenVerificationStage;

/// One step of a guard, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    VerifyToken,
    ResolvePrincipal,
    AccountState,
    RequireRole(Role),
}

#[derive(Clone)]
pub struct AuthPipeline {
    codec: Arc<TokenCodec>,
    verification: TokenVerificationStage,
    resolution: PrincipalResolutionStage,
    account_state: AccountStateGate,
}

impl AuthPipeline {
    pub fn new(codec: Arc<TokenCodec>, store: Arc<dyn PrincipalStore>) -> Self {
        Self {
            verification: TokenVerificationStage::new(codec.clone()),
            resolution: PrincipalResolutionStage::new(store),
            account_state: AccountStateGate::new(),
            codec,
        }
    }

    pub fn from_config(config: &AuthConfig, store: Arc<dyn PrincipalStore>) -> Self {
        Self::new(Arc::new(TokenCodec::new(config)), store)
    }

    /// Codec shared with credential issuance (login)
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Compose the guard for `operation`.
    pub fn guard(&self, operation: Operation) -> OperationGuard {
        OperationGuard {
            pipeline: self.clone(),
            operation,
            role_gate: operation.required_role().map(RoleGate::new),
        }
    }
}

/// The stages applied to a single operation.
#[derive(Clone)]
pub struct OperationGuard {
    pipeline: AuthPipeline,
    operation: Operation,
    role_gate: Option<RoleGate>,
}

impl OperationGuard {
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Stage list, for auditing which checks a route runs.
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = vec![
            Stage::VerifyToken,
            Stage::ResolvePrincipal,
            Stage::AccountState,
        ];
        if let Some(gate) = &self.role_gate {
            stages.push(Stage::RequireRole(gate.required()));
        }
        stages
    }

    /// Run every stage against the request headers.
    pub async fn authorize(&self, headers: &HeaderMap) -> Result<AuthContext, AuthError> {
        let claim = self.pipeline.verification.verify(headers)?;
        let principal = self.pipeline.resolution.resolve(&claim).await?;

        self.pipeline
            .account_state
            .check(&principal, self.operation)?;

        if let Some(gate) = &self.role_gate {
            gate.check(&principal)?;
        }

        tracing::debug!(
            user_id = %principal.id,
            operation = %self.operation,
            "Request authorized"
        );

        Ok(AuthContext::new(claim, principal, self.operation))
    }
}
