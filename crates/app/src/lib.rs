//! Mural application composition root
//!
//! Composes the domain routers into a single application and wires the
//! authentication pipeline shared by every protected route.

use std::sync::Arc;

use axum::{routing::get, Router};
use mural_auth::{AuthConfig, AuthPipeline, PgPrincipalStore, PrincipalStore};
use mural_common::Config;
use mural_posts::{PostsRepositories, PostsState};
use mural_users::{UsersRepositories, UsersState};
use sqlx::PgPool;

/// Token settings derived from the application config
pub fn auth_config(config: &Config) -> AuthConfig {
    AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        issuer: config.jwt_issuer.clone(),
        audience: config.jwt_audience.clone(),
        token_ttl: config.token_ttl(),
    }
}

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let store = Arc::new(PgPrincipalStore::new(pool.clone()));
    create_app_with_store(config, pool, store)
}

/// Same as [`create_app`], resolving principals through `store`.
pub fn create_app_with_store(
    config: &Config,
    pool: PgPool,
    store: Arc<dyn PrincipalStore>,
) -> Router {
    let auth = AuthPipeline::from_config(&auth_config(config), store);

    let users_state = UsersState {
        repos: UsersRepositories::new(pool.clone()),
        auth: auth.clone(),
    };
    let posts_state = PostsState {
        repos: PostsRepositories::new(pool),
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { "Mural API v0.0.1-SNAPSHOT" }))
        .merge(mural_users::routes(&auth).with_state(users_state))
        .merge(mural_posts::routes(&auth).with_state(posts_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
