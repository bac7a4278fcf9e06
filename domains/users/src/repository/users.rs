//! User repository

use crate::domain::entities::{NewUser, ProfilePost, User, DEFAULT_PHOTO_URL};
use mural_common::{Pagination, RepositoryError, Result};
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, email, phone, password_hash, photo, role, \
     is_active, created_at, updated_at";

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by (normalized) email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a new user with the `USER` role. A taken email is a conflict.
    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let photo = new_user
            .photo
            .unwrap_or_else(|| DEFAULT_PHOTO_URL.to_string());

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (id, name, email, phone, password_hash, photo)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.phone)
        .bind(&new_user.password_hash)
        .bind(photo)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }

    /// Update profile fields; `None` keeps the stored value
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        name: Option<String>,
        phone: Option<String>,
        photo: Option<String>,
    ) -> Result<Option<User>> {
        let updated = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                photo = COALESCE($4, photo),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(name)
        .bind(phone)
        .bind(photo)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Flip the account's active flag
    pub async fn set_active(&self, user_id: Uuid, active: bool) -> Result<Option<User>> {
        let updated = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users SET
                is_active = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(active)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// All users, oldest first
    pub async fn list(&self, page: Pagination) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC OFFSET $1 LIMIT $2"
        ))
        .bind(page.offset())
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// The user's own posts for the profile page, newest first
    pub async fn posts_for_user(&self, user_id: Uuid) -> Result<Vec<ProfilePost>> {
        let posts = sqlx::query_as::<_, ProfilePost>(
            r#"
            SELECT id, title, area_of_knowledge::text AS area_of_knowledge, theme,
                   stage::text AS stage, visible, created_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
