//! Post handlers for the signed-in user
//!
//! - POST /posts - Create a post
//! - GET /posts - List own posts
//! - GET /posts/{id} - Get a post
//! - PUT /posts/{id} - Update own post
//! - DELETE /posts/{id} - Delete own post
//! - GET /posts/get/{stage} - List own posts at a stage

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use mural_auth::{AuthContext, CurrentUser};
use mural_common::{Error, Result, ValidatedJson};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::api::state::PostsState;
use crate::domain::{AreaOfKnowledge, NewPost, Post, PostChanges, PostStage, PostView};

/// Request for creating a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub area_of_knowledge: AreaOfKnowledge,

    #[validate(length(min = 1, max = 200))]
    pub theme: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 20))]
    pub photos: Vec<String>,

    pub stage: Option<PostStage>,

    pub visible: Option<bool>,
}

/// Request for updating a post; absent fields are left unchanged
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub area_of_knowledge: Option<AreaOfKnowledge>,

    #[validate(length(min = 1, max = 200))]
    pub theme: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    #[validate(length(max = 20))]
    pub photos: Option<Vec<String>>,

    pub stage: Option<PostStage>,

    pub visible: Option<bool>,
}

impl From<UpdatePostRequest> for PostChanges {
    fn from(request: UpdatePostRequest) -> Self {
        Self {
            title: request.title.map(|t| t.trim().to_string()),
            area_of_knowledge: request.area_of_knowledge,
            theme: request.theme,
            description: request.description,
            photos: request.photos,
            stage: request.stage,
            visible: request.visible,
        }
    }
}

fn post_not_found() -> Error {
    Error::NotFound("Post not found".to_string())
}

/// Load a post the caller may modify
async fn owned_post(state: &PostsState, ctx: &AuthContext, id: Uuid) -> Result<Post> {
    let post = state
        .repos
        .posts
        .get_by_id(id)
        .await?
        .ok_or_else(post_not_found)?;

    if !ctx.owns(post.user_id) {
        tracing::info!(user_id = %ctx.user_id(), post_id = %id, "Rejected change to another user's post");
        return Err(Error::Authorization(
            "Only the author can change this post".to_string(),
        ));
    }

    Ok(post)
}

/// POST /posts - Create a post
pub async fn create_post(
    CurrentUser(ctx): CurrentUser,
    State(state): State<PostsState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>)> {
    let post = state
        .repos
        .posts
        .create(
            ctx.user_id(),
            NewPost {
                title: request.title.trim().to_string(),
                area_of_knowledge: request.area_of_knowledge,
                theme: request.theme,
                description: request.description,
                photos: request.photos,
                stage: request.stage,
                visible: request.visible.unwrap_or(true),
            },
        )
        .await?;

    tracing::info!(user_id = %ctx.user_id(), post_id = %post.id, "Post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /posts - List own posts
pub async fn list_own_posts(
    CurrentUser(ctx): CurrentUser,
    State(state): State<PostsState>,
) -> Result<Json<Vec<PostView>>> {
    let posts = state
        .repos
        .posts
        .list_by_author(ctx.user_id(), false)
        .await?;
    Ok(Json(posts))
}

/// GET /posts/{id} - Get a post
pub async fn get_post(
    CurrentUser(ctx): CurrentUser,
    State(state): State<PostsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostView>> {
    let view = state
        .repos
        .posts
        .get_view(id)
        .await?
        .filter(|view| view.post.is_visible_to(ctx.user_id(), ctx.is_admin()))
        .ok_or_else(post_not_found)?;

    Ok(Json(view))
}

/// PUT /posts/{id} - Update own post
pub async fn update_post(
    CurrentUser(ctx): CurrentUser,
    State(state): State<PostsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<Post>> {
    owned_post(&state, &ctx, id).await?;

    let post = state
        .repos
        .posts
        .update(id, PostChanges::from(request))
        .await?
        .ok_or_else(post_not_found)?;

    Ok(Json(post))
}

/// DELETE /posts/{id} - Delete own post
pub async fn delete_post(
    CurrentUser(ctx): CurrentUser,
    State(state): State<PostsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    owned_post(&state, &ctx, id).await?;

    if !state.repos.posts.delete(id).await? {
        return Err(post_not_found());
    }

    tracing::info!(user_id = %ctx.user_id(), post_id = %id, "Post deleted");
    Ok(Json(json!({ "msg": "Post deleted successfully" })))
}

/// GET /posts/get/{stage} - List own posts at a stage
pub async fn list_own_posts_by_stage(
    CurrentUser(ctx): CurrentUser,
    State(state): State<PostsState>,
    Path(stage): Path<PostStage>,
) -> Result<Json<Vec<Post>>> {
    let posts = state
        .repos
        .posts
        .list_by_author_and_stage(ctx.user_id(), stage)
        .await?;
    Ok(Json(posts))
}
