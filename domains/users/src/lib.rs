//! Users domain: sign-up, login, profile, account activation, admin listing

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::*;
pub use repository::{UserRepository, UsersRepositories};

pub use api::routes;
pub use api::UsersState;
