//! Request authentication pipeline for the Mural API
//!
//! Every protected route runs the same fixed sequence before its handler:
//! bearer token verification, principal resolution against the store, the
//! account-state gate and, for admin-only operations, the role gate. Guards
//! are composed per [`Operation`] when the router is built.

mod claims;
mod codec;
mod config;
mod context;
mod error;
mod extractors;
mod gates;
mod middleware;
mod operation;
mod pipeline;
mod resolution;
mod store;
mod types;
mod verification;

#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use claims::{TokenClaims, VerifiedClaim};
pub use codec::TokenCodec;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::CurrentUser;
pub use gates::{AccountStateGate, RoleGate};
pub use middleware::{protect, require_auth, ProtectedRouterExt};
pub use operation::Operation;
pub use pipeline::{AuthPipeline, OperationGuard, Stage};
pub use resolution::PrincipalResolutionStage;
pub use store::{PgPrincipalStore, PrincipalStore, StoreError};
pub use types::{Principal, Role, UnknownRole};
pub use verification::{extract_bearer_token, TokenVerificationStage};
