//! Authentication middleware for protected routes.

use crate::state::AppState;
use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

/// Axum middleware running the auth gate in front of protected routes.
///
/// On success the resolved [`Identity`](plandeck_gate::Identity) is inserted
/// into request extensions for handlers to pick up. On failure the client
/// gets the same generic unauthorized body whatever the rejection was; the
/// gate has already logged the specific kind.
pub async fn require_auth(mut req: Request, next: Next) -> Response {
    let Some(state) = req.extensions().get::<Arc<AppState>>().cloned() else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let authorization = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_owned());

    match state.gate.authenticate(authorization.as_deref()).await {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            next.run(req).await
        }
        Err(_) => unauthorized(),
    }
}

/// The uniform response for every authentication failure.
pub fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "unauthorized" })),
    )
        .into_response()
}

/// The response for an authenticated identity lacking a required role.
pub fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "forbidden" })),
    )
        .into_response()
}
