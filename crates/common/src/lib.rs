//! Shared utilities, configuration, and error handling for Mural
//!
//! This crate provides common functionality used across the Mural API:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Request extractors shared by domain handlers
//! - Credential hashing

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::{hash_credential, verify_credential};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
