//! Post repository

use crate::domain::{NewPost, Post, PostChanges, PostStage, PostView};
use mural_common::{Pagination, Result};
use sqlx::PgPool;
use uuid::Uuid;

const POST_COLUMNS: &str = "p.id, p.user_id, p.title, p.area_of_knowledge, p.theme, \
     p.description, p.photos, p.stage, p.visible, p.created_at, p.updated_at";

#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a post owned by `user_id`
    pub async fn create(&self, user_id: Uuid, new_post: NewPost) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            INSERT INTO posts AS p
                (id, user_id, title, area_of_knowledge, theme, description, photos, stage, visible)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&new_post.title)
        .bind(new_post.area_of_knowledge)
        .bind(&new_post.theme)
        .bind(&new_post.description)
        .bind(&new_post.photos)
        .bind(new_post.stage)
        .bind(new_post.visible)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Get a post by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE p.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Get a post with its author's name
    pub async fn get_view(&self, id: Uuid) -> Result<Option<PostView>> {
        let view = sqlx::query_as::<_, PostView>(&format!(
            r#"
            SELECT {POST_COLUMNS}, u.name AS author_name
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(view)
    }

    /// Posts written by `user_id`, newest first. `visible_only` hides drafts.
    pub async fn list_by_author(&self, user_id: Uuid, visible_only: bool) -> Result<Vec<PostView>> {
        let posts = sqlx::query_as::<_, PostView>(&format!(
            r#"
            SELECT {POST_COLUMNS}, u.name AS author_name
            FROM posts p
            JOIN users u ON u.id = p.user_id
            WHERE p.user_id = $1 AND (p.visible OR NOT $2)
            ORDER BY p.created_at DESC
            "#
        ))
        .bind(user_id)
        .bind(visible_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// The author's posts at one stage, newest first
    pub async fn list_by_author_and_stage(
        &self,
        user_id: Uuid,
        stage: PostStage,
    ) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(&format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            WHERE p.user_id = $1 AND p.stage = $2
            ORDER BY p.created_at DESC
            "#
        ))
        .bind(user_id)
        .bind(stage)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Every post, newest first
    pub async fn list_all(&self, page: Pagination) -> Result<Vec<PostView>> {
        let posts = sqlx::query_as::<_, PostView>(&format!(
            r#"
            SELECT {POST_COLUMNS}, u.name AS author_name
            FROM posts p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created_at DESC
            OFFSET $1 LIMIT $2
            "#
        ))
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Apply a partial update
    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(&format!(
            r#"
            UPDATE posts AS p SET
                title = COALESCE($2, p.title),
                area_of_knowledge = COALESCE($3, p.area_of_knowledge),
                theme = COALESCE($4, p.theme),
                description = COALESCE($5, p.description),
                photos = COALESCE($6, p.photos),
                stage = COALESCE($7, p.stage),
                visible = COALESCE($8, p.visible),
                updated_at = NOW()
            WHERE p.id = $1
            RETURNING {POST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(changes.title)
        .bind(changes.area_of_knowledge)
        .bind(changes.theme)
        .bind(changes.description)
        .bind(changes.photos)
        .bind(changes.stage)
        .bind(changes.visible)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Delete a post. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
