//! Posts domain state

use crate::PostsRepositories;

/// Application state for the Posts domain
#[derive(Clone)]
pub struct PostsState {
    pub repos: PostsRepositories,
}
