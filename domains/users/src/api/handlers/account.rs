//! Public account handlers
//!
//! - POST /users/sign-up - Register a new user
//! - POST /users/login - Exchange email and password for a bearer token

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use mural_common::{hash_credential, verify_credential, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::state::UsersState;
use crate::domain::validation::{normalize_email, validate_name, validate_password};
use crate::domain::{NewUser, UserResponse};

/// Request for registering a user
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, max = 100), custom(function = "validate_name"))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 32))]
    pub phone: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[validate(url)]
    pub photo: Option<String>,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Identity returned alongside the token
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub role: mural_auth::Role,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: LoginUser,
    pub token: String,
}

/// POST /users/sign-up - Register a new user
pub async fn sign_up(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<SignUpRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let email = normalize_email(&request.email);

    if state.repos.users.find_by_email(&email).await?.is_some() {
        return Err(Error::Conflict("Email is already registered".to_string()));
    }

    let password_hash = hash_credential(&request.password)?;

    let user = state
        .repos
        .users
        .create(NewUser {
            name: request.name.trim().to_string(),
            email,
            phone: request.phone,
            password_hash,
            photo: request.photo,
        })
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent sign-up
            Error::Conflict(_) => Error::Conflict("Email is already registered".to_string()),
            other => other,
        })?;

    tracing::info!(user_id = %user.id, "User signed up");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /users/login - Exchange email and password for a bearer token
pub async fn login(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = normalize_email(&request.email);

    let user = state
        .repos
        .users
        .find_by_email(&email)
        .await?
        .ok_or_else(|| Error::Validation("This email is not yet registered".to_string()))?;

    if !verify_credential(&request.password, &user.password_hash) {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        return Err(Error::Authentication("Wrong password or email".to_string()));
    }

    // Disabled accounts may still log in so they can reach reactivation
    let token = state
        .auth
        .codec()
        .issue(user.id, Some(user.role), Utc::now())
        .map_err(|e| Error::Internal(format!("Token issuance failed: {}", e)))?;

    tracing::info!(user_id = %user.id, active = user.is_active, "User logged in");

    Ok(Json(LoginResponse {
        user: LoginUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        },
        token,
    }))
}
