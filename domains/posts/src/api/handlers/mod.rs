//! HTTP handlers for the Posts domain

pub mod admin;
pub mod posts;
pub mod public;
