//! Admin handlers for the Users domain
//!
//! - GET /users/admin/all-users - List every user

use axum::{
    extract::{Query, State},
    Json,
};
use mural_auth::CurrentUser;
use mural_common::{Pagination, Result};

use crate::api::state::UsersState;
use crate::domain::UserResponse;

/// GET /users/admin/all-users - List every user
pub async fn list_all_users(
    CurrentUser(ctx): CurrentUser,
    State(state): State<UsersState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state.repos.users.list(page).await?;

    tracing::debug!(admin_id = %ctx.user_id(), count = users.len(), "Listed users");
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
