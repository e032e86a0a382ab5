//! Admin authentication
//!
//! The core catalog knows nothing about authorization; this module is the
//! request-layer capability check in front of the admin routes. Login
//! verifies credentials against the configured admin account and issues a
//! bearer token backed by an in-memory session set.

use super::AppState;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use tokio::sync::RwLock;

const TOKEN_LENGTH: usize = 32;

/// Admin account plus the set of live session tokens
#[derive(Debug)]
pub struct AdminAuth {
    username: String,
    password_digest: [u8; 32],
    sessions: RwLock<HashSet<String>>,
}

impl AdminAuth {
    /// Set up the admin account; the password is kept only as a digest
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_digest: Sha256::digest(password.as_bytes()).into(),
            sessions: RwLock::new(HashSet::new()),
        }
    }

    /// Verify credentials; on success issue and remember a session token
    pub async fn login(&self, username: &str, password: &str) -> Option<String> {
        let digest: [u8; 32] = Sha256::digest(password.as_bytes()).into();
        if username != self.username || digest != self.password_digest {
            return None;
        }

        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        self.sessions.write().await.insert(token.clone());
        Some(token)
    }

    /// Revoke a session token; revoking an unknown token is a no-op
    pub async fn logout(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Whether a token belongs to a live session
    pub async fn is_authorized(&self, token: &str) -> bool {
        self.sessions.read().await.contains(token)
    }
}

/// The bearer token of a request, if it carries one
pub(super) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Middleware guarding the admin routes
pub(super) async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    fn unauthorized() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )
            .into_response()
    }

    let Some(token) = bearer_token(req.headers()) else {
        return unauthorized();
    };
    if !state.auth.is_authorized(token).await {
        return unauthorized();
    }

    next.run(req).await
}
