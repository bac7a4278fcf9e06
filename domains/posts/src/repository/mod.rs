//! Repository implementations for the Posts domain

pub mod posts;

use sqlx::PgPool;

pub use posts::PostRepository;

/// Combined repository access for the Posts domain
#[derive(Clone)]
pub struct PostsRepositories {
    pub posts: PostRepository,
}

impl PostsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            posts: PostRepository::new(pool),
        }
    }
}
