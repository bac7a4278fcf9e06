//! Unauthenticated post handlers
//!
//! - GET /posts/unprotect/{user_id} - Visible posts of one author

use axum::{
    extract::{Path, State},
    Json,
};
use mural_common::Result;
use uuid::Uuid;

use crate::api::state::PostsState;
use crate::domain::PostView;

/// GET /posts/unprotect/{user_id} - Visible posts of one author
pub async fn list_posts_by_author(
    State(state): State<PostsState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<PostView>>> {
    let posts = state.repos.posts.list_by_author(user_id, true).await?;
    Ok(Json(posts))
}
