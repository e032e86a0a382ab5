//! The heritage resource catalog
//!
//! Ties the statement store, the type catalog, the projections, and the
//! mutations together behind one value. The catalog owns the store and the
//! path of its Turtle file; every mutation persists synchronously and is
//! rolled back in memory if the save fails, so memory and disk never
//! diverge past a reported success.

mod mutate;
mod project;
mod types;

pub use mutate::CreateRequest;
pub use project::{ResourceDetail, ResourceRow, ResourceSummary};
pub use types::TypeCatalog;

use crate::rdf::{StatementStore, StoreError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Catalog errors; the display strings double as the API error messages
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required input field is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The resource identifier is already taken
    #[error("Resource already exists")]
    Conflict(String),

    /// No resource with the given identifier
    #[error("Resource not found")]
    NotFound(String),

    /// The statement file could not be written
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// The catalog: one store, one type table, one durable file
#[derive(Debug)]
pub struct HeritageCatalog {
    store: StatementStore,
    types: TypeCatalog,
    db_path: PathBuf,
}

impl HeritageCatalog {
    /// Open the catalog from a Turtle file.
    ///
    /// A missing or corrupt file degrades to an empty store so the service
    /// stays available for writes; the failure is logged, not propagated.
    pub fn open(db_path: impl AsRef<Path>) -> Self {
        let db_path = db_path.as_ref().to_path_buf();
        let store = match StatementStore::load(&db_path) {
            Ok(store) => {
                info!("loaded {} statements from {}", store.len(), db_path.display());
                store
            }
            Err(e) => {
                warn!(
                    "could not load {}: {}; starting with an empty store",
                    db_path.display(),
                    e
                );
                StatementStore::new()
            }
        };
        Self {
            store,
            types: TypeCatalog::new(),
            db_path,
        }
    }

    /// The underlying statement store
    pub fn store(&self) -> &StatementStore {
        &self.store
    }

    /// List every recognized resource as a folded summary
    pub fn list(&self) -> Vec<ResourceSummary> {
        project::list_resources(&self.store, &self.types)
    }

    /// List raw (subject, type) rows for the admin surface
    pub fn admin_list(&self) -> Vec<ResourceRow> {
        project::list_resource_rows(&self.store, &self.types)
    }

    /// Detail view of one resource
    pub fn detail(&self, resource_id: &str) -> CatalogResult<ResourceDetail> {
        project::resource_detail(&self.store, resource_id)
    }

    /// Create a resource and persist the store. Returns the identifier.
    pub fn create(&mut self, request: &CreateRequest) -> CatalogResult<String> {
        let (id, added) = mutate::create_resource(&mut self.store, &self.types, request)?;

        if let Err(e) = self.store.save(&self.db_path) {
            warn!("save failed after create, rolling back: {}", e);
            for statement in &added {
                self.store.remove(statement);
            }
            return Err(e.into());
        }

        info!("created resource {}", id);
        Ok(id)
    }

    /// Delete a resource and persist the store
    pub fn delete(&mut self, resource_id: &str) -> CatalogResult<()> {
        let removed = mutate::delete_resource(&mut self.store, &self.types, resource_id)?;

        if let Err(e) = self.store.save(&self.db_path) {
            warn!("save failed after delete, rolling back: {}", e);
            for statement in removed {
                self.store.insert(statement);
            }
            return Err(e.into());
        }

        info!("deleted resource {}", resource_id);
        Ok(())
    }
}
