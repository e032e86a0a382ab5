//! Projection of the statement graph into resource views
//!
//! Resources are not stored as such; a resource is whatever falls out of
//! collecting the statements that share a subject. The list view folds the
//! typed-resource rows into one summary per subject, the detail view groups
//! every statement of one subject by predicate.

use super::types::TypeCatalog;
use super::{CatalogError, CatalogResult};
use crate::rdf::{vocab, Object, StatementStore};
use indexmap::IndexMap;
use serde::Serialize;

/// One entry of the catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSummary {
    /// External identifier (the IRI's local name)
    pub id: String,
    /// Full subject reference
    pub uri: String,
    /// Human-readable name (identifier with underscores restored)
    pub name: String,
    /// Short names of the recognized types, in encounter order
    pub types: Vec<String>,
    /// Comment text, empty if the resource has none
    pub description: String,
    /// Address text, empty if the resource has none
    pub address: String,
}

/// One unfolded row of the admin listing: a subject paired with a single
/// type, not aggregated
#[derive(Debug, Clone, Serialize)]
pub struct ResourceRow {
    pub id: String,
    pub uri: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub description: String,
    pub address: String,
}

/// Full detail of one resource
#[derive(Debug, Clone, Serialize)]
pub struct ResourceDetail {
    /// External identifier
    pub id: String,
    /// Full subject reference
    pub uri: String,
    /// Every statement of the subject, grouped by predicate IRI
    pub properties: IndexMap<String, Vec<String>>,
    /// Last comment statement seen, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Last address statement seen, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Short names of all type statements, recognized or not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Human-readable name, always recomputed from the identifier
    pub name: String,
}

/// List every recognized resource, one folded summary per subject.
///
/// Types accumulate across rows (deduplicated, encounter order);
/// description and address take the first non-empty value observed, which
/// is deterministic because the store iterates in insertion order.
pub fn list_resources(store: &StatementStore, catalog: &TypeCatalog) -> Vec<ResourceSummary> {
    let mut summaries: IndexMap<String, ResourceSummary> = IndexMap::new();

    for row in store.typed_resource_rows(catalog.recognized()) {
        let uri = row.subject.as_str().to_string();
        let entry = summaries.entry(uri.clone()).or_insert_with(|| {
            let id = row.subject.local_name().to_string();
            ResourceSummary {
                name: vocab::display_name(&id),
                id,
                uri,
                types: Vec::new(),
                description: String::new(),
                address: String::new(),
            }
        });

        let short_type = row.rdf_type.local_name().to_string();
        if !entry.types.contains(&short_type) {
            entry.types.push(short_type);
        }
        if entry.description.is_empty() {
            if let Some(comment) = &row.comment {
                entry.description.clone_from(comment);
            }
        }
        if entry.address.is_empty() {
            if let Some(address) = &row.address {
                entry.address.clone_from(address);
            }
        }
    }

    summaries.into_values().collect()
}

/// The admin listing: raw rows, one per (subject, type) combination
pub fn list_resource_rows(store: &StatementStore, catalog: &TypeCatalog) -> Vec<ResourceRow> {
    store
        .typed_resource_rows(catalog.recognized())
        .into_iter()
        .map(|row| {
            let id = row.subject.local_name().to_string();
            ResourceRow {
                uri: row.subject.as_str().to_string(),
                name: vocab::display_name(&id),
                id,
                resource_type: row.rdf_type.local_name().to_string(),
                description: row.comment.unwrap_or_default(),
                address: row.address.unwrap_or_default(),
            }
        })
        .collect()
}

/// Detail view of one resource.
///
/// A subject is found if it has any statement at all; the recognized-type
/// filter does not apply here.
pub fn resource_detail(store: &StatementStore, resource_id: &str) -> CatalogResult<ResourceDetail> {
    let subject = vocab::resource_iri(resource_id)
        .map_err(|_| CatalogError::NotFound(resource_id.to_string()))?;

    let statements = store.statements_for(&subject);
    if statements.is_empty() {
        return Err(CatalogError::NotFound(resource_id.to_string()));
    }

    let mut properties: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut description = None;
    let mut address = None;
    let mut types: Vec<String> = Vec::new();

    for (predicate, object) in &statements {
        properties
            .entry(predicate.as_str().to_string())
            .or_default()
            .push(object.lexical().to_string());

        if *predicate == vocab::rdfs::COMMENT {
            description = Some(object.lexical().to_string());
        } else if *predicate == vocab::schema::ADDRESS {
            address = Some(object.lexical().to_string());
        } else if *predicate == vocab::rdf::TYPE {
            types.push(local_short_name(object));
        }
    }

    Ok(ResourceDetail {
        id: resource_id.to_string(),
        uri: subject.as_str().to_string(),
        properties,
        description,
        address,
        types: if types.is_empty() { None } else { Some(types) },
        name: vocab::display_name(resource_id),
    })
}

fn local_short_name(object: &Object) -> String {
    crate::rdf::local_name(object.lexical()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Iri, Literal, Statement};

    fn store_with_fixture() -> StatementStore {
        let mut store = StatementStore::new();
        let kota_tua = vocab::resource_iri("Kota_Tua").unwrap();
        store.insert(Statement::new(
            kota_tua.clone(),
            vocab::rdf::TYPE.into(),
            Iri::from(vocab::dbo::HISTORIC_BUILDING),
        ));
        store.insert(Statement::new(
            kota_tua.clone(),
            vocab::rdf::TYPE.into(),
            Iri::from(vocab::schema::LANDMARKS_OR_HISTORICAL_BUILDINGS),
        ));
        store.insert(Statement::new(
            kota_tua.clone(),
            vocab::rdfs::COMMENT.into(),
            Literal::simple("The old town of Jakarta"),
        ));
        store.insert(Statement::new(
            kota_tua,
            vocab::schema::ADDRESS.into(),
            Literal::simple("West Jakarta"),
        ));

        // typed outside the recognized set; visible to detail only
        let document = vocab::resource_iri("City_Archive").unwrap();
        store.insert(Statement::new(
            document.clone(),
            vocab::rdf::TYPE.into(),
            Iri::new("http://xmlns.com/foaf/0.1/Document").unwrap(),
        ));
        store.insert(Statement::new(
            document,
            vocab::rdfs::COMMENT.into(),
            Literal::simple("Not a displayable resource"),
        ));

        store
    }

    #[test]
    fn test_list_folds_types_into_one_summary() {
        let store = store_with_fixture();
        let summaries = list_resources(&store, &TypeCatalog::new());

        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.id, "Kota_Tua");
        assert_eq!(summary.name, "Kota Tua");
        assert_eq!(
            summary.types,
            vec!["HistoricBuilding", "LandmarksOrHistoricalBuildings"]
        );
        assert_eq!(summary.description, "The old town of Jakarta");
        assert_eq!(summary.address, "West Jakarta");
    }

    #[test]
    fn test_admin_rows_stay_unfolded() {
        let store = store_with_fixture();
        let rows = list_resource_rows(&store, &TypeCatalog::new());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].resource_type, "HistoricBuilding");
        assert_eq!(rows[1].resource_type, "LandmarksOrHistoricalBuildings");
        assert!(rows.iter().all(|r| r.id == "Kota_Tua"));
        assert!(rows.iter().all(|r| r.description == "The old town of Jakarta"));
    }

    #[test]
    fn test_detail_groups_by_predicate() {
        let store = store_with_fixture();
        let detail = resource_detail(&store, "Kota_Tua").unwrap();

        assert_eq!(detail.uri, "http://heritage.jakarta.go.id/resource/Kota_Tua");
        assert_eq!(detail.name, "Kota Tua");
        assert_eq!(
            detail.properties["http://www.w3.org/1999/02/22-rdf-syntax-ns#type"].len(),
            2
        );
        assert_eq!(detail.description.as_deref(), Some("The old town of Jakarta"));
        assert_eq!(detail.address.as_deref(), Some("West Jakarta"));
        assert_eq!(
            detail.types.as_deref(),
            Some(&["HistoricBuilding".to_string(), "LandmarksOrHistoricalBuildings".to_string()][..])
        );
    }

    #[test]
    fn test_detail_is_type_agnostic_but_list_is_not() {
        let store = store_with_fixture();

        let detail = resource_detail(&store, "City_Archive").unwrap();
        assert_eq!(detail.types.as_deref(), Some(&["Document".to_string()][..]));

        let listed: Vec<String> = list_resources(&store, &TypeCatalog::new())
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert!(!listed.contains(&"City_Archive".to_string()));
    }

    #[test]
    fn test_detail_unknown_resource() {
        let store = store_with_fixture();
        assert!(matches!(
            resource_detail(&store, "Nonexistent_Place"),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_detail_without_optional_fields_skips_keys() {
        let mut store = StatementStore::new();
        let monas = vocab::resource_iri("Monas").unwrap();
        store.insert(Statement::new(
            monas,
            Iri::new("http://schema.org/url").unwrap(),
            Literal::simple("https://example.org/monas"),
        ));

        let detail = resource_detail(&store, "Monas").unwrap();
        assert!(detail.description.is_none());
        assert!(detail.types.is_none());

        let json = serde_json::to_value(&detail).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("types").is_none());
        assert!(json.get("properties").is_some());
    }
}
