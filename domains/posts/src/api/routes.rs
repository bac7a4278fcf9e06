//! Route definitions for the Posts domain API

use axum::{routing::get, Router};
use mural_auth::{AuthPipeline, Operation, ProtectedRouterExt};

use super::handlers::{admin, posts, public};
use super::state::PostsState;

/// Post routes for the signed-in user
fn post_routes(auth: &AuthPipeline) -> Router<PostsState> {
    Router::new()
        .protected(auth, Operation::CreatePost, posts::create_post)
        .protected(auth, Operation::ListOwnPosts, posts::list_own_posts)
        .protected(auth, Operation::GetPost, posts::get_post)
        .protected(auth, Operation::UpdatePost, posts::update_post)
        .protected(auth, Operation::DeletePost, posts::delete_post)
        .protected(auth, Operation::ListOwnPostsByStage, posts::list_own_posts_by_stage)
}

fn admin_routes(auth: &AuthPipeline) -> Router<PostsState> {
    Router::new().protected(auth, Operation::ListAllPosts, admin::list_all_posts)
}

/// Author pages; no credential required
fn public_routes() -> Router<PostsState> {
    Router::new().route(
        "/posts/unprotect/{user_id}",
        get(public::list_posts_by_author),
    )
}

/// Create all Posts domain routes
pub fn routes(auth: &AuthPipeline) -> Router<PostsState> {
    Router::new()
        .merge(post_routes(auth))
        .merge(admin_routes(auth))
        .merge(public_routes())
}
