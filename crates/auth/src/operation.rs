//! Catalog of protected operations
//!
//! Every route that sits behind the auth pipeline is listed here exactly once.
//! The gate policy for an operation is a property of the variant, so the set
//! of checks applied to a route is fixed when the router is built.

use axum::http::Method;
use serde::Serialize;

use crate::types::Role;

/// A protected API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    GetProfile,
    UpdateProfile,
    DisableAccount,
    ReactivateAccount,
    ListAllUsers,
    CreatePost,
    ListOwnPosts,
    GetPost,
    UpdatePost,
    DeletePost,
    ListOwnPostsByStage,
    ListAllPosts,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::GetProfile,
        Operation::UpdateProfile,
        Operation::DisableAccount,
        Operation::ReactivateAccount,
        Operation::ListAllUsers,
        Operation::CreatePost,
        Operation::ListOwnPosts,
        Operation::GetPost,
        Operation::UpdatePost,
        Operation::DeletePost,
        Operation::ListOwnPostsByStage,
        Operation::ListAllPosts,
    ];

    /// The one operation a deactivated principal may still perform.
    pub const ACCOUNT_REACTIVATION: Operation = Operation::ReactivateAccount;

    /// Stable identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GetProfile => "users.get_profile",
            Operation::UpdateProfile => "users.update_profile",
            Operation::DisableAccount => "users.disable_account",
            Operation::ReactivateAccount => "users.reactivate_account",
            Operation::ListAllUsers => "users.admin.list_all",
            Operation::CreatePost => "posts.create",
            Operation::ListOwnPosts => "posts.list_own",
            Operation::GetPost => "posts.get",
            Operation::UpdatePost => "posts.update",
            Operation::DeletePost => "posts.delete",
            Operation::ListOwnPostsByStage => "posts.list_own_by_stage",
            Operation::ListAllPosts => "posts.admin.list_all",
        }
    }

    /// HTTP method and axum path template the operation is mounted at.
    pub fn route(&self) -> (Method, &'static str) {
        match self {
            Operation::GetProfile => (Method::GET, "/users/profile"),
            Operation::UpdateProfile => (Method::PUT, "/users/profile/update"),
            Operation::DisableAccount => (Method::DELETE, "/users/profile/disable-account"),
            Operation::ReactivateAccount => (Method::PUT, "/users/profile/active-account"),
            Operation::ListAllUsers => (Method::GET, "/users/admin/all-users"),
            Operation::CreatePost => (Method::POST, "/posts"),
            Operation::ListOwnPosts => (Method::GET, "/posts"),
            Operation::GetPost => (Method::GET, "/posts/{id}"),
            Operation::UpdatePost => (Method::PUT, "/posts/{id}"),
            Operation::DeletePost => (Method::DELETE, "/posts/{id}"),
            Operation::ListOwnPostsByStage => (Method::GET, "/posts/get/{stage}"),
            Operation::ListAllPosts => (Method::GET, "/posts/admin/all-posts"),
        }
    }

    pub fn path(&self) -> &'static str {
        self.route().1
    }

    /// Role a principal must hold, if the operation is restricted.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Operation::ListAllUsers | Operation::ListAllPosts => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_account_reactivation(&self) -> bool {
        *self == Self::ACCOUNT_REACTIVATION
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
