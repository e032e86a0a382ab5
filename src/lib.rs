//! Pusaka Heritage Catalog
//!
//! A catalog of Jakarta heritage resources (events, museums, historic
//! buildings) kept as a set of subject-predicate-object statements and
//! served over a small HTTP API. The statement set is loaded from a
//! Turtle file at startup, queried in memory, and written back
//! synchronously after every mutation.
//!
//! # Example
//!
//! ```rust
//! use pusaka::catalog::{CreateRequest, HeritageCatalog};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut catalog = HeritageCatalog::open(dir.path().join("database.ttl"));
//!
//! let id = catalog
//!     .create(&CreateRequest {
//!         name: "Monas Tower".to_string(),
//!         type_name: Some("Museum".to_string()),
//!         description: "The national monument".to_string(),
//!         address: "Central Jakarta".to_string(),
//!     })
//!     .unwrap();
//! assert_eq!(id, "Monas_Tower");
//!
//! let detail = catalog.detail("Monas_Tower").unwrap();
//! assert_eq!(detail.name, "Monas Tower");
//! ```

#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod http;
pub mod rdf;

// Re-export main types for convenience
pub use catalog::{
    CatalogError, CatalogResult, CreateRequest, HeritageCatalog, ResourceDetail, ResourceRow,
    ResourceSummary, TypeCatalog,
};

pub use config::Config;

pub use http::{AdminAuth, AppState, HttpServer};

pub use rdf::{
    Iri, Literal, Object, Statement, StatementPattern, StatementStore, StoreError, StoreResult,
    TypedResourceRow,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
