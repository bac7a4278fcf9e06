//! Post entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// School area a post belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "area_of_knowledge")]
pub enum AreaOfKnowledge {
    #[serde(rename = "linguagens")]
    #[sqlx(rename = "linguagens")]
    Languages,
    #[serde(rename = "ciências humanas")]
    #[sqlx(rename = "ciências humanas")]
    HumanSciences,
    #[serde(rename = "ciências da natureza")]
    #[sqlx(rename = "ciências da natureza")]
    NaturalSciences,
    #[serde(rename = "matemática")]
    #[sqlx(rename = "matemática")]
    Mathematics,
}

/// Study stage, `"1"` through `"4"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "post_stage")]
pub enum PostStage {
    #[serde(rename = "1")]
    #[sqlx(rename = "1")]
    One,
    #[serde(rename = "2")]
    #[sqlx(rename = "2")]
    Two,
    #[serde(rename = "3")]
    #[sqlx(rename = "3")]
    Three,
    #[serde(rename = "4")]
    #[sqlx(rename = "4")]
    Four,
}

/// A `posts` row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub area_of_knowledge: AreaOfKnowledge,
    pub theme: String,
    pub description: String,
    pub photos: Vec<String>,
    pub stage: Option<PostStage>,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Hidden posts are only shown to their author and admins.
    pub fn is_visible_to(&self, viewer_id: Uuid, viewer_is_admin: bool) -> bool {
        self.visible || viewer_is_admin || self.user_id == viewer_id
    }
}

/// A post joined with its author's display name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PostView {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub post: Post,
    pub author_name: String,
}

/// Data needed to insert a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub area_of_knowledge: AreaOfKnowledge,
    pub theme: String,
    pub description: String,
    pub photos: Vec<String>,
    pub stage: Option<PostStage>,
    pub visible: bool,
}

/// Partial update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub area_of_knowledge: Option<AreaOfKnowledge>,
    pub theme: Option<String>,
    pub description: Option<String>,
    pub photos: Option<Vec<String>>,
    pub stage: Option<PostStage>,
    pub visible: Option<bool>,
}
