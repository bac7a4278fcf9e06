//! Route definitions for the Users domain API

use axum::{routing::post, Router};
use mural_auth::{AuthPipeline, Operation, ProtectedRouterExt};

use super::handlers::{account, admin, profile};
use super::state::UsersState;

/// Sign-up and login; no credential required
fn public_routes() -> Router<UsersState> {
    Router::new()
        .route("/users/sign-up", post(account::sign_up))
        .route("/users/login", post(account::login))
}

/// Profile and account routes for the signed-in user
fn profile_routes(auth: &AuthPipeline) -> Router<UsersState> {
    Router::new()
        .protected(auth, Operation::GetProfile, profile::get_profile)
        .protected(auth, Operation::UpdateProfile, profile::update_profile)
        .protected(auth, Operation::DisableAccount, profile::disable_account)
        .protected(auth, Operation::ReactivateAccount, profile::reactivate_account)
}

fn admin_routes(auth: &AuthPipeline) -> Router<UsersState> {
    Router::new().protected(auth, Operation::ListAllUsers, admin::list_all_users)
}

/// Create all Users domain routes
pub fn routes(auth: &AuthPipeline) -> Router<UsersState> {
    Router::new()
        .merge(public_routes())
        .merge(profile_routes(auth))
        .merge(admin_routes(auth))
}
