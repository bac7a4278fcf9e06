//! Admin handlers for the Posts domain
//!
//! - GET /posts/admin/all-posts - List every post

use axum::{
    extract::{Query, State},
    Json,
};
use mural_auth::CurrentUser;
use mural_common::{Pagination, Result};

use crate::api::state::PostsState;
use crate::domain::PostView;

/// GET /posts/admin/all-posts - List every post, hidden ones included
pub async fn list_all_posts(
    CurrentUser(ctx): CurrentUser,
    State(state): State<PostsState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<PostView>>> {
    let posts = state.repos.posts.list_all(page).await?;

    tracing::debug!(admin_id = %ctx.user_id(), count = posts.len(), "Listed posts");
    Ok(Json(posts))
}
