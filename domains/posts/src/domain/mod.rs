//! Posts domain model

pub mod entities;

pub use entities::{AreaOfKnowledge, NewPost, Post, PostChanges, PostStage, PostView};
