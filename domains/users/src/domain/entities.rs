//! User entities

use chrono::{DateTime, Utc};
use mural_auth::Role;
use serde::Serialize;
use uuid::Uuid;

/// Placeholder avatar for users who never uploaded a photo
pub const DEFAULT_PHOTO_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTYE2EOfj-iQsL0fUlsZ1GxmRBpN0XJhpVZ3UEZi1Q8SBGkseVjrlwl4IO7aOTraRAeClU&usqp=CAU";

/// Full `users` row. Contains the credential hash; never serialize it.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub photo: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to insert a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub photo: Option<String>,
}

/// Outward view of a user
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub photo: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            photo: user.photo,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Post summary shown on the owner's profile
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProfilePost {
    pub id: Uuid,
    pub title: String,
    pub area_of_knowledge: String,
    pub theme: String,
    pub stage: Option<String>,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
}
