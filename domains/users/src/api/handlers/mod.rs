//! HTTP handlers for the Users domain

pub mod account;
pub mod admin;
pub mod profile;
