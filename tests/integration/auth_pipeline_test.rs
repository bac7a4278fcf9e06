//! Authentication pipeline integration tests
//!
//! Runs the full application router against the in-memory principal store.
//! Requests that pass the pipeline are checked on a router of stub handlers
//! mounted through the same operation catalog, so no database is needed.

#![allow(dead_code)]

mod common;

use std::time::Duration;

use axum::{
    http::{Method, StatusCode},
    Json, Router,
};
use chrono::Utc;
use mural_auth::{
    AuthPipeline, CurrentUser, Operation, ProtectedRouterExt, Role, StoreError, TokenCodec,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::{body_json, request, test_config, MockApp};

fn concrete_path(operation: Operation) -> (Method, String) {
    let (method, path) = operation.route();
    let path = path
        .replace("{id}", &Uuid::new_v4().to_string())
        .replace("{stage}", "1");
    (method, path)
}

async fn whoami(CurrentUser(ctx): CurrentUser) -> Json<Value> {
    Json(json!({
        "id": ctx.user_id(),
        "role": ctx.role(),
        "operation": ctx.operation.as_str(),
    }))
}

/// Every catalog operation mounted with a stub handler
fn stub_router(app: &MockApp) -> Router {
    let pipeline = AuthPipeline::from_config(
        &mural_app::auth_config(&test_config()),
        app.store.clone(),
    );
    Operation::ALL
        .into_iter()
        .fold(Router::new(), |router, op| router.protected(&pipeline, op, whoami))
}

async fn call(router: &Router, operation: Operation, token: Option<&str>) -> (StatusCode, Value) {
    let (method, path) = concrete_path(operation);
    let response = router
        .clone()
        .oneshot(request(method, &path, token, None))
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

mod test_credentials {
    use super::*;

    #[tokio::test]
    async fn test_missing_credential_on_every_protected_route() {
        let app = MockApp::new();

        for op in Operation::ALL {
            let (status, body) = call(&app.router, op, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", op);
            assert_eq!(body["code"], "MISSING_CREDENTIAL", "{}", op);
            assert!(body["msg"].is_string());
        }
        assert_eq!(app.store.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_missing_credential() {
        let app = MockApp::new();
        let response = app
            .router
            .clone()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/users/profile")
                    .header("authorization", "Basic dXNlcjpwYXNz")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["code"], "MISSING_CREDENTIAL");
    }

    #[tokio::test]
    async fn test_expired_token_is_invalid() {
        let app = MockApp::new();
        let user = app.store.add_user(Role::User, true);
        let stale = app
            .codec
            .issue(user.id, None, Utc::now() - chrono::Duration::hours(3))
            .unwrap();

        let (status, body) = call(&app.router, Operation::GetProfile, Some(&stale)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INVALID_CREDENTIAL");
        assert_eq!(app.store.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_token_expired_seconds_ago_is_invalid() {
        let app = MockApp::new();
        let user = app.store.add_user(Role::User, true);
        let ttl = test_config().token_ttl_secs as i64;
        let stale = app
            .codec
            .issue(user.id, None, Utc::now() - chrono::Duration::seconds(ttl + 5))
            .unwrap();

        let (status, body) = call(&app.router, Operation::GetProfile, Some(&stale)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INVALID_CREDENTIAL");
        assert_eq!(app.store.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_wrong_audience_is_invalid() {
        let app = MockApp::new();
        let user = app.store.add_user(Role::User, true);

        let mut foreign = mural_app::auth_config(&test_config());
        foreign.audience = Some("another-api".to_string());
        let token = TokenCodec::new(&foreign)
            .issue(user.id, None, Utc::now())
            .unwrap();

        let (status, body) = call(&app.router, Operation::ListOwnPosts, Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INVALID_CREDENTIAL");
    }

    #[tokio::test]
    async fn test_tampered_token_is_invalid() {
        let app = MockApp::new();
        let user = app.store.add_user(Role::User, true);
        let mut token = app.token_for(user.id);
        token.push('x');

        let (status, body) = call(&app.router, Operation::GetProfile, Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INVALID_CREDENTIAL");
    }
}

mod test_principal_resolution {
    use super::*;

    #[tokio::test]
    async fn test_deleted_subject_is_not_found() {
        let app = MockApp::new();
        let user = app.store.add_user(Role::User, true);
        let token = app.token_for(user.id);
        app.store.remove(user.id);

        let (status, body) = call(&app.router, Operation::GetProfile, Some(&token)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "PRINCIPAL_NOT_FOUND");
        assert_eq!(body["msg"], "User not found");
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_server_error() {
        let app = MockApp::new();
        let user = app.store.add_user(Role::User, true);
        let token = app.token_for(user.id);
        app.store.fail_with(Some(StoreError::Unavailable(
            "connection refused: 10.0.0.5:5432".to_string(),
        )));

        let (status, body) = call(&app.router, Operation::GetProfile, Some(&token)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "STORE_UNAVAILABLE");
        assert_eq!(body["msg"], "Internal server error");
        assert!(!body.to_string().contains("10.0.0.5"));
    }
}

mod test_gates {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_active_user_scenario() {
        let app = MockApp::new();
        let router = stub_router(&app);
        let u1 = app.store.add_user(Role::User, true);
        let token = app.token_for(u1.id);

        let (status, body) = call(&app.router, Operation::ListAllUsers, Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INSUFFICIENT_ROLE");

        let (status, body) = call(&router, Operation::CreatePost, Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], u1.id.to_string());
        assert_eq!(body["operation"], "posts.create");
    }

    #[test_log::test(tokio::test)]
    async fn test_disabled_user_scenario() {
        let app = MockApp::new();
        let router = stub_router(&app);
        let u2 = app.store.add_user(Role::User, false);
        let token = app.token_for(u2.id);

        let (status, body) = call(&router, Operation::ReactivateAccount, Some(&token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], u2.id.to_string());

        for op in Operation::ALL {
            if op == Operation::ReactivateAccount {
                continue;
            }
            let (status, body) = call(&router, op, Some(&token)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", op);
            assert_eq!(body["code"], "ACCOUNT_DISABLED", "{}", op);
            assert_eq!(body["msg"], "User disabled account");
        }
    }

    #[tokio::test]
    async fn test_admin_reaches_admin_operations() {
        let app = MockApp::new();
        let router = stub_router(&app);
        let admin = app.store.add_user(Role::Admin, true);
        let token = app.token_for(admin.id);

        for op in [Operation::ListAllUsers, Operation::ListAllPosts] {
            let (status, body) = call(&router, op, Some(&token)).await;
            assert_eq!(status, StatusCode::OK, "{}", op);
            assert_eq!(body["role"], "ADMIN");
        }
    }

    #[tokio::test]
    async fn test_demoted_admin_loses_access_with_same_token() {
        let app = MockApp::new();
        let router = stub_router(&app);
        let admin = app.store.add_user(Role::Admin, true);
        let token = app
            .codec
            .issue(admin.id, Some(Role::Admin), Utc::now())
            .unwrap();

        let (status, _) = call(&router, Operation::ListAllPosts, Some(&token)).await;
        assert_eq!(status, StatusCode::OK);

        app.store.set_role(admin.id, Role::User);

        let (status, body) = call(&router, Operation::ListAllPosts, Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "INSUFFICIENT_ROLE");
    }

    #[tokio::test]
    async fn test_resolution_is_repeatable() {
        let app = MockApp::new();
        let router = stub_router(&app);
        let user = app.store.add_user(Role::User, true);
        let token = app.token_for(user.id);

        let (_, first) = call(&router, Operation::GetProfile, Some(&token)).await;
        let (_, second) = call(&router, Operation::GetProfile, Some(&token)).await;

        assert_eq!(first, second);
        assert_eq!(app.store.lookup_count(), 2);
    }
}

mod test_concurrency {
    use super::*;

    #[tokio::test]
    async fn test_concurrent_requests_resolve_their_own_principal() {
        let app = MockApp::new();
        let router = stub_router(&app);
        app.store.set_latency(Some(Duration::from_millis(5)));

        let users: Vec<_> = (0..24)
            .map(|i| app.store.add_user(if i % 2 == 0 { Role::User } else { Role::Admin }, true))
            .collect();

        let handles: Vec<_> = users
            .iter()
            .map(|user| {
                let router = router.clone();
                let token = app.token_for(user.id);
                tokio::spawn(async move { call(&router, Operation::GetProfile, Some(&token)).await })
            })
            .collect();

        for (user, handle) in users.iter().zip(handles) {
            let (status, body) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["id"], user.id.to_string());
            assert_eq!(body["role"], serde_json::to_value(user.role).unwrap());
        }
        assert_eq!(app.store.completed_lookups(), users.len());
    }

    #[tokio::test]
    async fn test_abandoned_request_cancels_lookup() {
        let app = MockApp::new();
        let user = app.store.add_user(Role::User, true);
        let token = app.token_for(user.id);
        app.store.set_latency(Some(Duration::from_secs(30)));

        let (method, path) = concrete_path(Operation::GetProfile);
        let pending = app
            .router
            .clone()
            .oneshot(request(method, &path, Some(&token), None));
        let outcome = tokio::time::timeout(Duration::from_millis(50), pending).await;

        assert!(outcome.is_err());
        assert_eq!(app.store.lookup_count(), 1);
        assert_eq!(app.store.completed_lookups(), 0);
    }
}

mod test_public_routes {
    use super::*;

    #[tokio::test]
    async fn test_health_needs_no_credential() {
        let app = MockApp::new();
        let response = app
            .router
            .clone()
            .oneshot(request(Method::GET, "/health", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_sign_up_validation_runs_before_database() {
        let app = MockApp::new();
        let response = app
            .router
            .clone()
            .oneshot(request(
                Method::POST,
                "/users/sign-up",
                None,
                Some(json!({
                    "name": "Ana",
                    "email": "ana@example.com",
                    "phone": "123",
                    "password": "weak",
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
        assert_eq!(app.store.lookup_count(), 0);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_blank_name() {
        let app = MockApp::new();
        let response = app
            .router
            .clone()
            .oneshot(request(
                Method::POST,
                "/users/sign-up",
                None,
                Some(json!({
                    "name": "   ",
                    "email": "blank@example.com",
                    "phone": "123",
                    "password": "Abcdef1!",
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_author_page_rejects_malformed_id() {
        let app = MockApp::new();
        let response = app
            .router
            .clone()
            .oneshot(request(Method::GET, "/posts/unprotect/not-a-uuid", None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
