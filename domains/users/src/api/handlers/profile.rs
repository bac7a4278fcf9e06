//! Authenticated profile handlers
//!
//! - GET /users/profile - Current user with their posts
//! - PUT /users/profile/update - Update name, phone, photo
//! - DELETE /users/profile/disable-account - Disable own account
//! - PUT /users/profile/active-account - Reactivate own account

use axum::{extract::State, Json};
use mural_auth::CurrentUser;
use mural_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::state::UsersState;
use crate::domain::validation::validate_name;
use crate::domain::{ProfilePost, UserResponse};

/// Request for updating the profile. Role and active flag are not editable here.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100), custom(function = "validate_name"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub phone: Option<String>,

    #[validate(url)]
    pub photo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub posts: Vec<ProfilePost>,
}

fn user_gone() -> Error {
    Error::NotFound("User not found".to_string())
}

/// GET /users/profile - Current user with their posts
pub async fn get_profile(
    CurrentUser(ctx): CurrentUser,
    State(state): State<UsersState>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .repos
        .users
        .get_by_id(ctx.user_id())
        .await?
        .ok_or_else(user_gone)?;
    let posts = state.repos.users.posts_for_user(user.id).await?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from(user),
        posts,
    }))
}

/// PUT /users/profile/update - Update name, phone, photo
pub async fn update_profile(
    CurrentUser(ctx): CurrentUser,
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .update_profile(
            ctx.user_id(),
            request.name.map(|n| n.trim().to_string()),
            request.phone,
            request.photo,
        )
        .await?
        .ok_or_else(user_gone)?;

    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/profile/disable-account - Disable own account
pub async fn disable_account(
    CurrentUser(ctx): CurrentUser,
    State(state): State<UsersState>,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .set_active(ctx.user_id(), false)
        .await?
        .ok_or_else(user_gone)?;

    tracing::info!(user_id = %user.id, "Account disabled");
    Ok(Json(UserResponse::from(user)))
}

/// PUT /users/profile/active-account - Reactivate own account
///
/// The only operation a disabled account can reach.
pub async fn reactivate_account(
    CurrentUser(ctx): CurrentUser,
    State(state): State<UsersState>,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .set_active(ctx.user_id(), true)
        .await?
        .ok_or_else(user_gone)?;

    tracing::info!(user_id = %user.id, was_active = ctx.principal.active, "Account reactivated");
    Ok(Json(UserResponse::from(user)))
}
