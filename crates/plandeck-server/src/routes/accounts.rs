//! Account endpoints: signup, login, logout, current user.

use crate::middleware::auth::{forbidden, unauthorized};
use crate::state::AppState;
use crate::users::AccountError;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use plandeck_gate::Identity;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /auth/accounts/signup`
pub async fn signup(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<Credentials>,
) -> Response {
    if body.email.is_empty() || body.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email and password are required" })),
        )
            .into_response();
    }

    match state.users.create(&body.email, &body.password, "member") {
        Ok((record, created_at)) => (
            StatusCode::OK,
            Json(json!({
                "message": "User created successfully",
                "user": {
                    "id": record.id,
                    "email": record.email,
                    "created_at": created_at,
                },
            })),
        )
            .into_response(),
        Err(AccountError::EmailTaken) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "An account with this email already exists" })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "signup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response()
        }
    }
}

/// `POST /auth/accounts/login`
///
/// Verifies credentials and issues a token. Wrong email, wrong password, and
/// unknown account all produce the same generic unauthorized body.
pub async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<Credentials>,
) -> Response {
    if body.email.is_empty() || body.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Email and password are required" })),
        )
            .into_response();
    }

    let Some(record) = state.users.verify_credentials(&body.email, &body.password) else {
        tracing::debug!("login rejected for unknown or mismatched credentials");
        return unauthorized();
    };

    match state.codec.issue(record.id.clone(), record.role.clone()) {
        Ok(access_token) => (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "access_token": access_token,
                "user": {
                    "id": record.id,
                    "email": record.email,
                },
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "token issuance failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "internal error" })),
            )
                .into_response()
        }
    }
}

/// `POST /auth/accounts/logout`
///
/// Revokes the presented token; subsequent requests with it are refused.
pub async fn logout(
    Extension(state): Extension<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Response {
    state.revocations.revoke(identity.token_id);

    (
        StatusCode::OK,
        Json(json!({ "message": "Logged out successfully" })),
    )
        .into_response()
}

/// `GET /auth/accounts/user`
pub async fn current_user(Extension(identity): Extension<Identity>) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "user": {
                "id": identity.user_id,
                "email": identity.email,
                "role": identity.role,
            },
        })),
    )
        .into_response()
}

/// `GET /auth/accounts/users` (admin only)
pub async fn list_users(
    Extension(state): Extension<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Response {
    if !identity.has_role("admin") {
        return forbidden();
    }

    (
        StatusCode::OK,
        Json(json!({ "users": state.users.list() })),
    )
        .into_response()
}
