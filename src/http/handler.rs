//! HTTP handlers for the catalog API

use super::AppState;
use crate::catalog::{CatalogError, CreateRequest};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

/// Credentials for the admin login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn error_response(err: CatalogError) -> Response {
    let status = match &err {
        CatalogError::Validation(reason) => {
            debug!("rejected request: {}", reason);
            StatusCode::BAD_REQUEST
        }
        CatalogError::Conflict(id) => {
            debug!("create conflict for {}", id);
            StatusCode::BAD_REQUEST
        }
        CatalogError::NotFound(id) => {
            debug!("unknown resource {}", id);
            StatusCode::NOT_FOUND
        }
        CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// GET /api/data — all recognized resources, one summary each
pub async fn list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    Json(catalog.list())
}

/// GET /api/data/{id} — detail of one resource
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Response {
    let catalog = state.catalog.read().await;
    match catalog.detail(&resource_id) {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /api/admin/events — raw (subject, type) rows
pub async fn admin_list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    Json(catalog.admin_list())
}

/// POST /api/admin/events — create a resource
pub async fn create_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateRequest>,
) -> Response {
    let mut catalog = state.catalog.write().await;
    match catalog.create(&request) {
        Ok(id) => Json(json!({
            "message": "Resource added successfully",
            "id": id,
        }))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/admin/events/{id} — delete a resource
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(resource_id): Path<String>,
) -> Response {
    let mut catalog = state.catalog.write().await;
    match catalog.delete(&resource_id) {
        Ok(()) => Json(json!({ "message": "Resource deleted successfully" })).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/admin/login — verify credentials, issue a session token
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Response {
    match state.auth.login(&request.username, &request.password).await {
        Some(token) => Json(json!({
            "message": "Login successful",
            "token": token,
        }))
        .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid credentials" })),
        )
            .into_response(),
    }
}

/// POST /api/admin/logout — revoke the presented session token
pub async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = super::auth::bearer_token(&headers) {
        state.auth.logout(token).await;
    }
    Json(json!({ "message": "Logout successful" })).into_response()
}
