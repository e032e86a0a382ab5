//! HTTP surface of the catalog
//!
//! Request handlers call into the catalog core through one shared,
//! lock-guarded value: reads take the lock shared, mutations take it
//! exclusively for the whole {mutate, save} sequence.

mod auth;
mod handler;
mod server;

pub use auth::AdminAuth;
pub use server::{router, HttpServer};

use crate::catalog::HeritageCatalog;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// The catalog, behind the single reader-writer lock
    pub catalog: Arc<RwLock<HeritageCatalog>>,
    /// Admin account and live sessions
    pub auth: Arc<AdminAuth>,
}

impl AppState {
    /// Bundle a catalog and an admin account into handler state
    pub fn new(catalog: HeritageCatalog, auth: AdminAuth) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            auth: Arc::new(auth),
        }
    }
}
