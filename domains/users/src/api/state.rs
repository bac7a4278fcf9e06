//! Users domain state

use crate::UsersRepositories;
use mural_auth::AuthPipeline;

/// Application state for the Users domain
#[derive(Clone)]
pub struct UsersState {
    pub repos: UsersRepositories,
    pub auth: AuthPipeline,
}
