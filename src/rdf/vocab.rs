//! Namespace and vocabulary constants
//!
//! The three namespaces below are part of the external contract with the
//! stored Turtle data and must not change.

use super::term::{Iri, TermError, TermResult};

pub use oxrdf::vocab::{rdf, rdfs};

/// Site-local resource namespace (the identifier space)
pub mod heritage {
    /// Namespace base IRI
    pub const BASE: &str = "http://heritage.jakarta.go.id/resource/";
}

/// DBpedia general-purpose ontology
pub mod dbo {
    use oxrdf::NamedNodeRef;

    /// Namespace base IRI
    pub const BASE: &str = "http://dbpedia.org/ontology/";

    pub const EVENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dbpedia.org/ontology/Event");
    pub const MUSEUM: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dbpedia.org/ontology/Museum");
    pub const HISTORIC_BUILDING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://dbpedia.org/ontology/HistoricBuilding");
}

/// schema.org structured-data vocabulary
pub mod schema {
    use oxrdf::NamedNodeRef;

    /// Namespace base IRI
    pub const BASE: &str = "http://schema.org/";

    pub const EVENT: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Event");
    pub const MUSEUM: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/Museum");
    pub const LANDMARKS_OR_HISTORICAL_BUILDINGS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://schema.org/LandmarksOrHistoricalBuildings");
    pub const ADDRESS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://schema.org/address");
}

/// Derive the external identifier of a resource from its human-readable name
pub fn resource_id(name: &str) -> String {
    name.replace(' ', "_")
}

/// Restore the human-readable name from a resource identifier
pub fn display_name(id: &str) -> String {
    id.replace('_', " ")
}

/// Build the full subject reference for a resource identifier
pub fn resource_iri(id: &str) -> TermResult<Iri> {
    if id.is_empty() {
        return Err(TermError::InvalidIri("empty resource identifier".to_string()));
    }
    Iri::new(&format!("{}{}", heritage::BASE, id))
}
