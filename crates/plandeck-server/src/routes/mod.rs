//! Route wiring for the account service.

pub mod accounts;

use crate::middleware::auth::require_auth;
use crate::state::AppState;
use axum::{
    Extension, Json, Router, middleware,
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;

/// Build the service router over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route("/auth/accounts/logout", post(accounts::logout))
        .route("/auth/accounts/user", get(accounts::current_user))
        .route("/auth/accounts/users", get(accounts::list_users))
        .route_layer(middleware::from_fn(require_auth));

    Router::new()
        .route("/auth/accounts/signup", post(accounts::signup))
        .route("/auth/accounts/login", post(accounts::login))
        .route("/healthz", get(healthz))
        .merge(protected)
        .layer(Extension(state))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({ "ok": true, "service": "plandeck-server" }))
}
