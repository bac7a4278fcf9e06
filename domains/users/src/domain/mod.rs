//! Users domain model

pub mod entities;
pub mod validation;

pub use entities::{NewUser, ProfilePost, User, UserResponse, DEFAULT_PHOTO_URL};
