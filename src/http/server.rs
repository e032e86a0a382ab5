//! HTTP server for the catalog API

use super::handler::{
    admin_list_handler, create_handler, delete_handler, detail_handler, list_handler,
    login_handler, logout_handler,
};
use super::{auth, AppState};
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Build the API router; public routes, then the admin routes behind the
/// session middleware
pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/api/admin/events", get(admin_list_handler).post(create_handler))
        .route("/api/admin/events/:id", delete(delete_handler))
        .route("/api/admin/logout", post(logout_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_admin,
        ));

    Router::new()
        .route("/api/data", get(list_handler))
        .route("/api/data/:id", get(detail_handler))
        .route("/api/admin/login", post(login_handler))
        .merge(admin)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP server managing the catalog API
pub struct HttpServer {
    state: AppState,
    address: String,
    port: u16,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(state: AppState, address: impl Into<String>, port: u16) -> Self {
        Self {
            state,
            address: address.into(),
            port,
        }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = router(self.state.clone());

        let addr = format!("{}:{}", self.address, self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("catalog API available at http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
