//! Posts domain: study posts by area of knowledge and stage

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::*;
pub use repository::{PostRepository, PostsRepositories};

pub use api::routes;
pub use api::PostsState;
