//! Resource creation and deletion
//!
//! Both operations compute a statement delta against the store and return
//! it, so the caller can undo the in-memory change when the subsequent
//! save fails.

use super::types::TypeCatalog;
use super::{CatalogError, CatalogResult};
use crate::rdf::{vocab, Literal, Statement, StatementStore};
use serde::Deserialize;

/// Input for creating a resource
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    /// Human-readable name; the identifier is derived from it
    pub name: String,
    /// Creation short name; unrecognized or absent values become Event
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Optional comment text
    #[serde(default)]
    pub description: String,
    /// Optional address text
    #[serde(default)]
    pub address: String,
}

/// Create a resource: a type statement plus optional comment/address
/// statements. Returns the new identifier and the statements actually
/// added (for rollback).
pub fn create_resource(
    store: &mut StatementStore,
    catalog: &TypeCatalog,
    request: &CreateRequest,
) -> CatalogResult<(String, Vec<Statement>)> {
    if request.name.is_empty() {
        return Err(CatalogError::Validation("Name is required".to_string()));
    }

    let rdf_type = catalog
        .resolve_creatable(request.type_name.as_deref().unwrap_or("Event"))
        .clone();

    let id = vocab::resource_id(&request.name);
    let subject = vocab::resource_iri(&id)
        .map_err(|e| CatalogError::Validation(e.to_string()))?;

    if store.has_type_in(&subject, catalog.recognized()) {
        return Err(CatalogError::Conflict(id));
    }

    let mut statements = vec![Statement::new(
        subject.clone(),
        vocab::rdf::TYPE.into(),
        rdf_type,
    )];
    if !request.description.is_empty() {
        statements.push(Statement::new(
            subject.clone(),
            vocab::rdfs::COMMENT.into(),
            Literal::simple(request.description.clone()),
        ));
    }
    if !request.address.is_empty() {
        statements.push(Statement::new(
            subject,
            vocab::schema::ADDRESS.into(),
            Literal::simple(request.address.clone()),
        ));
    }

    let added: Vec<Statement> = statements
        .into_iter()
        .filter(|st| store.insert(st.clone()))
        .collect();

    Ok((id, added))
}

/// Delete a resource: remove every statement whose subject is the
/// resource. Fails unless the subject carries at least one recognized
/// type statement. Returns the removed statements (for rollback).
pub fn delete_resource(
    store: &mut StatementStore,
    catalog: &TypeCatalog,
    resource_id: &str,
) -> CatalogResult<Vec<Statement>> {
    let subject = vocab::resource_iri(resource_id)
        .map_err(|_| CatalogError::NotFound(resource_id.to_string()))?;

    if !store.has_type_in(&subject, catalog.recognized()) {
        return Err(CatalogError::NotFound(resource_id.to_string()));
    }

    Ok(store.remove_all(&subject))
}
