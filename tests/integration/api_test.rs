//! API endpoint integration tests
//!
//! Exercise the users and posts endpoints against a real Postgres. Run with
//! `TEST_DATABASE_URL` set and `--ignored`.

#![allow(dead_code)]

mod common;
mod posts;
mod users;
