//! End-to-end tests for the account service router.
//!
//! These drive the full axum router in memory: signup, login, the protected
//! current-user route, logout revocation, and the generic unauthorized
//! response shape.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use plandeck_core::PlandeckConfig;
use plandeck_server::{routes, state::AppState};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    let mut cfg = PlandeckConfig::default();
    cfg.auth.secret = Some("integration-test-secret".to_string());
    routes::router(Arc::new(AppState::init(&cfg).unwrap()))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn signup_and_login(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/accounts/signup",
            json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/accounts/login",
            json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_signup_login_current_user_flow() {
    let app = test_app();
    let token = signup_and_login(&app, "u1@example.com", "hunter2!").await;

    let response = app
        .clone()
        .oneshot(get_with_token("/auth/accounts/user", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "u1@example.com");
    assert_eq!(body["user"]["role"], "member");
}

#[tokio::test]
async fn test_missing_and_garbage_credentials_are_generic_401s() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/auth/accounts/user")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let missing_body = body_json(response).await;

    let response = app
        .clone()
        .oneshot(get_with_token("/auth/accounts/user", "garbage-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let garbage_body = body_json(response).await;

    // The client cannot tell which check failed.
    assert_eq!(missing_body, json!({ "error": "unauthorized" }));
    assert_eq!(garbage_body, missing_body);
}

#[tokio::test]
async fn test_wrong_password_is_a_generic_401() {
    let app = test_app();
    signup_and_login(&app, "u1@example.com", "hunter2!").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/accounts/login",
            json!({ "email": "u1@example.com", "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "unauthorized" }));
}

#[tokio::test]
async fn test_signup_requires_email_and_password() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/accounts/signup",
            json!({ "email": "u1@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let app = test_app();
    signup_and_login(&app, "u1@example.com", "hunter2!").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/accounts/signup",
            json!({ "email": "u1@example.com", "password": "other" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_logout_revokes_the_token() {
    let app = test_app();
    let token = signup_and_login(&app, "u1@example.com", "hunter2!").await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/accounts/logout")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The same token no longer authenticates.
    let response = app
        .clone()
        .oneshot(get_with_token("/auth/accounts/user", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_listing_is_admin_only() {
    let app = test_app();
    let member_token = signup_and_login(&app, "u1@example.com", "hunter2!").await;

    let response = app
        .clone()
        .oneshot(get_with_token("/auth/accounts/users", &member_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The bootstrapped admin can list accounts.
    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/accounts/login",
            json!({ "email": "admin@plandeck.local", "password": "changeme" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let admin_token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(get_with_token("/auth/accounts/users", &admin_token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let emails: Vec<_> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap().to_string())
        .collect();
    assert!(emails.contains(&"admin@plandeck.local".to_string()));
    assert!(emails.contains(&"u1@example.com".to_string()));
}

#[tokio::test]
async fn test_healthz_is_public() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
